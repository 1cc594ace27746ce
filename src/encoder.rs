use crate::schema::{FeatureSchema, Slot, FEATURE_COUNT};
use crate::types::{City, Festival, OrderType, RawDeliveryInput, Traffic, VehicleType, Weather};

/// Categorical field that owns a contiguous group of indicator slots.
pub trait OneHot: Copy {
    /// Every indicator slot of the group, in schema order.
    const GROUP: &'static [Slot];

    /// Indicator for this option, or `None` when the model has no column
    /// for it. A `None` leaves the whole group at 0.
    fn slot(self) -> Option<Slot>;
}

impl OneHot for Weather {
    const GROUP: &'static [Slot] = &[
        Slot::WeatherFog,
        Slot::WeatherNaN,
        Slot::WeatherSandstorms,
        Slot::WeatherStormy,
        Slot::WeatherSunny,
        Slot::WeatherWindy,
    ];

    fn slot(self) -> Option<Slot> {
        match self {
            Weather::Sunny => Some(Slot::WeatherSunny),
            Weather::Stormy => Some(Slot::WeatherStormy),
            Weather::Cloudy => None,
            Weather::Windy => Some(Slot::WeatherWindy),
            Weather::Fog => Some(Slot::WeatherFog),
            Weather::Sandstorms => Some(Slot::WeatherSandstorms),
            Weather::Unknown => Some(Slot::WeatherNaN),
        }
    }
}

impl OneHot for Traffic {
    const GROUP: &'static [Slot] = &[
        Slot::TrafficJam,
        Slot::TrafficLow,
        Slot::TrafficMedium,
        Slot::TrafficNaN,
    ];

    fn slot(self) -> Option<Slot> {
        match self {
            Traffic::Low => Some(Slot::TrafficLow),
            Traffic::Medium => Some(Slot::TrafficMedium),
            Traffic::High => None,
            Traffic::Jam => Some(Slot::TrafficJam),
            Traffic::Unknown => Some(Slot::TrafficNaN),
        }
    }
}

impl OneHot for OrderType {
    const GROUP: &'static [Slot] = &[Slot::OrderDrinks, Slot::OrderMeal, Slot::OrderSnack];

    fn slot(self) -> Option<Slot> {
        match self {
            OrderType::Snack => Some(Slot::OrderSnack),
            OrderType::Meal => Some(Slot::OrderMeal),
            OrderType::Drinks => Some(Slot::OrderDrinks),
            OrderType::Buffet => None,
        }
    }
}

impl OneHot for VehicleType {
    const GROUP: &'static [Slot] = &[
        Slot::VehicleElectricScooter,
        Slot::VehicleMotorcycle,
        Slot::VehicleScooter,
    ];

    fn slot(self) -> Option<Slot> {
        match self {
            VehicleType::Scooter => Some(Slot::VehicleScooter),
            VehicleType::Motorcycle => Some(Slot::VehicleMotorcycle),
            VehicleType::ElectricScooter => Some(Slot::VehicleElectricScooter),
            VehicleType::Bicycle => None,
        }
    }
}

impl OneHot for Festival {
    const GROUP: &'static [Slot] = &[Slot::FestivalNo, Slot::FestivalYes];

    fn slot(self) -> Option<Slot> {
        match self {
            Festival::No => Some(Slot::FestivalNo),
            Festival::Yes => Some(Slot::FestivalYes),
        }
    }
}

impl OneHot for City {
    const GROUP: &'static [Slot] = &[Slot::CityNaN, Slot::CitySemiUrban, Slot::CityUrban];

    fn slot(self) -> Option<Slot> {
        match self {
            City::Urban => Some(Slot::CityUrban),
            City::Metropolitian => None,
            City::SemiUrban => Some(Slot::CitySemiUrban),
            City::Unknown => Some(Slot::CityNaN),
        }
    }
}

/// Indicator groups in schema order.
pub const INDICATOR_GROUPS: [&[Slot]; 6] = [
    Weather::GROUP,
    Traffic::GROUP,
    OrderType::GROUP,
    VehicleType::GROUP,
    Festival::GROUP,
    City::GROUP,
];

/// Fixed-size feature record keyed by [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl EncodedFeatureVector {
    pub fn zeroed() -> Self {
        Self { values: [0.0; FEATURE_COUNT] }
    }

    pub fn get(&self, slot: Slot) -> f32 {
        self.values[slot.index()]
    }

    fn set(&mut self, slot: Slot, v: f32) {
        self.values[slot.index()] = v;
    }

    fn set_indicator<C: OneHot>(&mut self, option: C) {
        if let Some(slot) = option.slot() {
            self.set(slot, 1.0);
        }
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Values in training-column order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, f32)> + '_ {
        Slot::ALL.iter().map(move |s| (*s, self.get(*s)))
    }

    /// Sum of a group's indicators; 0.0 or 1.0 for any encoded input.
    pub fn group_sum(&self, group: &[Slot]) -> f32 {
        group.iter().map(|s| self.get(*s)).sum()
    }
}

pub fn encode(raw: &RawDeliveryInput) -> EncodedFeatureVector {
    let mut v = EncodedFeatureVector::zeroed();

    v.set(Slot::DeliveryPersonAge, raw.delivery_person_age as f32);
    v.set(Slot::DeliveryPersonRatings, raw.delivery_person_ratings);
    v.set(Slot::VehicleCondition, raw.vehicle_condition as f32);
    v.set(Slot::MultipleDeliveries, raw.multiple_deliveries as f32);
    v.set(Slot::DistanceKm, raw.distance_km);
    v.set(Slot::OrderHour, raw.order_hour as f32);
    v.set(Slot::OrderDayOfWeek, raw.order_day_of_week as f32);
    v.set(Slot::OrderDayOfMonth, raw.order_day_of_month as f32);

    v.set_indicator(raw.weather_conditions);
    v.set_indicator(raw.traffic_density);
    v.set_indicator(raw.order_type);
    v.set_indicator(raw.vehicle_type);
    v.set_indicator(raw.festival);
    v.set_indicator(raw.city);

    v
}

/// Encode and lay out for `schema`; output length is always `schema.len()`.
pub fn encode_for_schema(raw: &RawDeliveryInput, schema: &FeatureSchema) -> Vec<f32> {
    schema.align(&encode(raw))
}
