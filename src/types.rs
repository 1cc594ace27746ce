use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of options offered by a selector.
///
/// `OPTIONS` is in display order; the first entry is the selector default.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    const TITLE: &'static str;
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sunny,
    Stormy,
    Cloudy,
    Windy,
    Fog,
    Sandstorms,
    #[serde(rename = "NaN")]
    Unknown,
}

impl Choice for Weather {
    const TITLE: &'static str = "Weather Conditions";
    const OPTIONS: &'static [Self] = &[
        Self::Sunny,
        Self::Stormy,
        Self::Cloudy,
        Self::Windy,
        Self::Fog,
        Self::Sandstorms,
        Self::Unknown,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Stormy => "Stormy",
            Self::Cloudy => "Cloudy",
            Self::Windy => "Windy",
            Self::Fog => "Fog",
            Self::Sandstorms => "Sandstorms",
            Self::Unknown => "NaN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traffic {
    Low,
    Medium,
    High,
    Jam,
    #[serde(rename = "NaN")]
    Unknown,
}

impl Choice for Traffic {
    const TITLE: &'static str = "Road Traffic Density";
    const OPTIONS: &'static [Self] = &[
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Jam,
        Self::Unknown,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Jam => "Jam",
            Self::Unknown => "NaN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Snack,
    Meal,
    Drinks,
    Buffet,
}

impl Choice for OrderType {
    const TITLE: &'static str = "Type of Order";
    const OPTIONS: &'static [Self] = &[Self::Snack, Self::Meal, Self::Drinks, Self::Buffet];

    fn label(self) -> &'static str {
        match self {
            Self::Snack => "Snack",
            Self::Meal => "Meal",
            Self::Drinks => "Drinks",
            Self::Buffet => "Buffet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Scooter,
    Motorcycle,
    ElectricScooter,
    Bicycle,
}

impl Choice for VehicleType {
    const TITLE: &'static str = "Type of Vehicle";
    const OPTIONS: &'static [Self] = &[
        Self::Scooter,
        Self::Motorcycle,
        Self::ElectricScooter,
        Self::Bicycle,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Scooter => "scooter",
            Self::Motorcycle => "motorcycle",
            Self::ElectricScooter => "electric_scooter",
            Self::Bicycle => "bicycle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Festival {
    No,
    Yes,
}

impl Choice for Festival {
    const TITLE: &'static str = "Festival";
    const OPTIONS: &'static [Self] = &[Self::No, Self::Yes];

    fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Urban,
    Metropolitian,
    #[serde(rename = "Semi-Urban")]
    SemiUrban,
    #[serde(rename = "NaN")]
    Unknown,
}

impl Choice for City {
    const TITLE: &'static str = "City";
    const OPTIONS: &'static [Self] = &[
        Self::Urban,
        Self::Metropolitian,
        Self::SemiUrban,
        Self::Unknown,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Metropolitian => "Metropolitian",
            Self::SemiUrban => "Semi-Urban",
            Self::Unknown => "NaN",
        }
    }
}

/// Inclusive bound plus default for an integer control.
#[derive(Debug, Clone, Copy)]
pub struct IntBound {
    pub title: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl IntBound {
    pub fn clamp(&self, v: i32) -> i32 {
        v.clamp(self.min, self.max)
    }
}

/// Inclusive bound plus default for a float control.
#[derive(Debug, Clone, Copy)]
pub struct FloatBound {
    pub title: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl FloatBound {
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() {
            return self.default;
        }
        v.clamp(self.min, self.max)
    }
}

pub const AGE: IntBound = IntBound {
    title: "Delivery Person Age",
    min: 18,
    max: 50,
    default: 25,
};
pub const RATINGS: FloatBound = FloatBound {
    title: "Delivery Person Ratings",
    min: 1.0,
    max: 5.0,
    default: 4.5,
};
pub const VEHICLE_CONDITION: IntBound = IntBound {
    title: "Vehicle Condition (0-3)",
    min: 0,
    max: 3,
    default: 1,
};
pub const MULTIPLE_DELIVERIES: IntBound = IntBound {
    title: "Multiple Deliveries? (0/1)",
    min: 0,
    max: 1,
    default: 0,
};
pub const DISTANCE_KM: FloatBound = FloatBound {
    title: "Distance from Restaurant (km)",
    min: 0.1,
    max: 50.0,
    default: 5.0,
};
pub const ORDER_HOUR: IntBound = IntBound {
    title: "Order Hour (0-23)",
    min: 0,
    max: 23,
    default: 12,
};
pub const DAY_OF_WEEK: IntBound = IntBound {
    title: "Day of the Week (0=Mon, 6=Sun)",
    min: 0,
    max: 6,
    default: 2,
};
pub const DAY_OF_MONTH: IntBound = IntBound {
    title: "Day of the Month (1-31)",
    min: 1,
    max: 31,
    default: 15,
};

/// One delivery as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDeliveryInput {
    pub delivery_person_age: i32,
    pub delivery_person_ratings: f32,
    pub vehicle_condition: i32,
    pub multiple_deliveries: i32,
    pub distance_km: f32,
    pub order_hour: i32,
    pub order_day_of_week: i32,
    pub order_day_of_month: i32,
    pub weather_conditions: Weather,
    pub traffic_density: Traffic,
    pub order_type: OrderType,
    pub vehicle_type: VehicleType,
    pub festival: Festival,
    pub city: City,
}

impl Default for RawDeliveryInput {
    fn default() -> Self {
        Self {
            delivery_person_age: AGE.default,
            delivery_person_ratings: RATINGS.default,
            vehicle_condition: VEHICLE_CONDITION.default,
            multiple_deliveries: MULTIPLE_DELIVERIES.default,
            distance_km: DISTANCE_KM.default,
            order_hour: ORDER_HOUR.default,
            order_day_of_week: DAY_OF_WEEK.default,
            order_day_of_month: DAY_OF_MONTH.default,
            weather_conditions: Weather::OPTIONS[0],
            traffic_density: Traffic::OPTIONS[0],
            order_type: OrderType::OPTIONS[0],
            vehicle_type: VehicleType::OPTIONS[0],
            festival: Festival::OPTIONS[0],
            city: City::OPTIONS[0],
        }
    }
}

impl RawDeliveryInput {
    /// Pull every numeric field into its control's range.
    pub fn clamped(self) -> Self {
        Self {
            delivery_person_age: AGE.clamp(self.delivery_person_age),
            delivery_person_ratings: RATINGS.clamp(self.delivery_person_ratings),
            vehicle_condition: VEHICLE_CONDITION.clamp(self.vehicle_condition),
            multiple_deliveries: MULTIPLE_DELIVERIES.clamp(self.multiple_deliveries),
            distance_km: DISTANCE_KM.clamp(self.distance_km),
            order_hour: ORDER_HOUR.clamp(self.order_hour),
            order_day_of_week: DAY_OF_WEEK.clamp(self.order_day_of_week),
            order_day_of_month: DAY_OF_MONTH.clamp(self.order_day_of_month),
            ..self
        }
    }
}
