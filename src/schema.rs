//! Column layout the delivery-time model was trained on.
//!
//! Names are reproduced byte for byte, including the trailing space that the
//! traffic, order, vehicle, festival and city dummies carry. The model's
//! weights are positional, so both the order and the spelling matter.

use std::collections::HashMap;

use crate::encoder::EncodedFeatureVector;

pub const FEATURE_COUNT: usize = 29;

pub const TRAINING_COLUMNS: [&str; FEATURE_COUNT] = [
    "Delivery_person_Age",
    "Delivery_person_Ratings",
    "Vehicle_condition",
    "multiple_deliveries",
    "distance_km",
    "order_hour",
    "order_day_of_week",
    "order_day_of_month",
    "Weatherconditions_conditions Fog",
    "Weatherconditions_conditions NaN",
    "Weatherconditions_conditions Sandstorms",
    "Weatherconditions_conditions Stormy",
    "Weatherconditions_conditions Sunny",
    "Weatherconditions_conditions Windy",
    "Road_traffic_density_Jam ",
    "Road_traffic_density_Low ",
    "Road_traffic_density_Medium ",
    "Road_traffic_density_NaN ",
    "Type_of_order_Drinks ",
    "Type_of_order_Meal ",
    "Type_of_order_Snack ",
    "Type_of_vehicle_electric_scooter ",
    "Type_of_vehicle_motorcycle ",
    "Type_of_vehicle_scooter ",
    "Festival_No ",
    "Festival_Yes ",
    "City_NaN ",
    "City_Semi-Urban ",
    "City_Urban ",
];

/// One slot of the training layout. Discriminants are column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    DeliveryPersonAge,
    DeliveryPersonRatings,
    VehicleCondition,
    MultipleDeliveries,
    DistanceKm,
    OrderHour,
    OrderDayOfWeek,
    OrderDayOfMonth,
    WeatherFog,
    WeatherNaN,
    WeatherSandstorms,
    WeatherStormy,
    WeatherSunny,
    WeatherWindy,
    TrafficJam,
    TrafficLow,
    TrafficMedium,
    TrafficNaN,
    OrderDrinks,
    OrderMeal,
    OrderSnack,
    VehicleElectricScooter,
    VehicleMotorcycle,
    VehicleScooter,
    FestivalNo,
    FestivalYes,
    CityNaN,
    CitySemiUrban,
    CityUrban,
}

impl Slot {
    pub const ALL: [Slot; FEATURE_COUNT] = [
        Slot::DeliveryPersonAge,
        Slot::DeliveryPersonRatings,
        Slot::VehicleCondition,
        Slot::MultipleDeliveries,
        Slot::DistanceKm,
        Slot::OrderHour,
        Slot::OrderDayOfWeek,
        Slot::OrderDayOfMonth,
        Slot::WeatherFog,
        Slot::WeatherNaN,
        Slot::WeatherSandstorms,
        Slot::WeatherStormy,
        Slot::WeatherSunny,
        Slot::WeatherWindy,
        Slot::TrafficJam,
        Slot::TrafficLow,
        Slot::TrafficMedium,
        Slot::TrafficNaN,
        Slot::OrderDrinks,
        Slot::OrderMeal,
        Slot::OrderSnack,
        Slot::VehicleElectricScooter,
        Slot::VehicleMotorcycle,
        Slot::VehicleScooter,
        Slot::FestivalNo,
        Slot::FestivalYes,
        Slot::CityNaN,
        Slot::CitySemiUrban,
        Slot::CityUrban,
    ];

    pub const NUMERIC: [Slot; 8] = [
        Slot::DeliveryPersonAge,
        Slot::DeliveryPersonRatings,
        Slot::VehicleCondition,
        Slot::MultipleDeliveries,
        Slot::DistanceKm,
        Slot::OrderHour,
        Slot::OrderDayOfWeek,
        Slot::OrderDayOfMonth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        TRAINING_COLUMNS[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        TRAINING_COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|i| Slot::ALL[i])
    }
}

/// Ordered column list a loaded model expects.
///
/// Usually identical to [`TRAINING_COLUMNS`]; when a model ships its own
/// `feat_list` that list is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    columns: Vec<String>,
    slots: Vec<Option<Slot>>,
}

impl FeatureSchema {
    pub fn training() -> Self {
        Self::new(TRAINING_COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    pub fn new(columns: Vec<String>) -> Self {
        let slots = columns.iter().map(|c| Slot::from_name(c)).collect();
        Self { columns, slots }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Columns this schema names that the encoder never writes.
    pub fn unknown_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .zip(&self.slots)
            .filter(|(_, s)| s.is_none())
            .map(|(c, _)| c.as_str())
            .collect()
    }

    /// Training columns absent from this schema.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        TRAINING_COLUMNS
            .iter()
            .copied()
            .filter(|c| self.position(c).is_none())
            .collect()
    }

    pub fn matches_training(&self) -> bool {
        self.columns.len() == FEATURE_COUNT
            && self.columns.iter().zip(TRAINING_COLUMNS).all(|(a, b)| a == b)
    }

    /// Lay an encoded record out in this schema's column order.
    ///
    /// Columns the encoder has no slot for stay at 0.0, so the output is
    /// always `self.len()` long.
    pub fn align(&self, encoded: &EncodedFeatureVector) -> Vec<f32> {
        let mut v = vec![0.0; self.columns.len()];
        for (out, slot) in v.iter_mut().zip(&self.slots) {
            if let Some(slot) = slot {
                *out = encoded.get(*slot);
            }
        }
        v
    }

    /// Name -> value view of an aligned vector, for logging and tests.
    pub fn named<'a>(&'a self, values: &[f32]) -> HashMap<&'a str, f32> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(values.iter().copied())
            .collect()
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::training()
    }
}
