/// Integration tests for the one-hot feature encoder
///
/// Run with: cargo test --test encoder_tests -- --nocapture

use delivery_predictor::encoder::INDICATOR_GROUPS;
use delivery_predictor::types::{Choice, City, Festival, OrderType, Traffic, VehicleType, Weather};
use delivery_predictor::{
    encode, encode_for_schema, FeatureSchema, OneHot, RawDeliveryInput, Slot, FEATURE_COUNT,
    TRAINING_COLUMNS,
};

fn example_input() -> RawDeliveryInput {
    RawDeliveryInput {
        delivery_person_age: 25,
        delivery_person_ratings: 4.5,
        vehicle_condition: 1,
        multiple_deliveries: 0,
        distance_km: 5.0,
        order_hour: 12,
        order_day_of_week: 2,
        order_day_of_month: 15,
        weather_conditions: Weather::Sunny,
        traffic_density: Traffic::Low,
        order_type: OrderType::Meal,
        vehicle_type: VehicleType::Motorcycle,
        festival: Festival::No,
        city: City::Urban,
    }
}

/// Every combination of categorical options over a fixed numeric part.
fn all_category_combinations() -> Vec<RawDeliveryInput> {
    let mut out = Vec::new();
    for &w in Weather::OPTIONS {
        for &t in Traffic::OPTIONS {
            for &o in OrderType::OPTIONS {
                for &v in VehicleType::OPTIONS {
                    for &f in Festival::OPTIONS {
                        for &c in City::OPTIONS {
                            out.push(RawDeliveryInput {
                                weather_conditions: w,
                                traffic_density: t,
                                order_type: o,
                                vehicle_type: v,
                                festival: f,
                                city: c,
                                ..example_input()
                            });
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_end_to_end_example() {
    println!("\n=== Test: End-to-End Example ===");
    let schema = FeatureSchema::training();
    let vec = encode_for_schema(&example_input(), &schema);
    let named = schema.named(&vec);

    assert_eq!(vec.len(), 29);

    let expected_hot = [
        "Weatherconditions_conditions Sunny",
        "Road_traffic_density_Low ",
        "Type_of_order_Meal ",
        "Type_of_vehicle_motorcycle ",
        "Festival_No ",
        "City_Urban ",
    ];
    for name in expected_hot {
        assert_eq!(named[name], 1.0, "{name:?} should be hot");
    }

    let numeric = [
        ("Delivery_person_Age", 25.0),
        ("Delivery_person_Ratings", 4.5),
        ("Vehicle_condition", 1.0),
        ("multiple_deliveries", 0.0),
        ("distance_km", 5.0),
        ("order_hour", 12.0),
        ("order_day_of_week", 2.0),
        ("order_day_of_month", 15.0),
    ];
    for (name, v) in numeric {
        assert_eq!(named[name], v, "{name:?}");
    }

    for name in &TRAINING_COLUMNS[8..] {
        if !expected_hot.contains(name) {
            assert_eq!(named[name], 0.0, "{name:?} should be cold");
        }
    }
    println!("✓ Example vector matches: {:?}", vec);
}

#[test]
fn test_length_matches_schema() {
    println!("\n=== Test: Output Length ===");
    let raw = example_input();

    assert_eq!(encode(&raw).len(), FEATURE_COUNT);
    assert_eq!(encode_for_schema(&raw, &FeatureSchema::training()).len(), FEATURE_COUNT);

    // Shorter, reordered and padded schemas keep their own length
    let short = FeatureSchema::new(vec!["distance_km".into(), "City_Urban ".into()]);
    assert_eq!(encode_for_schema(&raw, &short), vec![5.0, 1.0]);

    let padded = FeatureSchema::new(vec![
        "extra_col".into(),
        "Delivery_person_Age".into(),
        "City_Urban".into(), // no trailing space: not a training column
    ]);
    assert_eq!(encode_for_schema(&raw, &padded), vec![0.0, 25.0, 0.0]);

    let empty = FeatureSchema::new(Vec::new());
    assert!(encode_for_schema(&raw, &empty).is_empty());
    println!("✓ Length always follows the schema");
}

#[test]
fn test_one_hot_partition_all_combinations() {
    println!("\n=== Test: One-Hot Partition ===");
    let inputs = all_category_combinations();
    for raw in &inputs {
        let v = encode(raw);
        for group in INDICATOR_GROUPS {
            let s = v.group_sum(group);
            assert!(s == 0.0 || s == 1.0, "group sum {s} for {raw:?}");
            for slot in group {
                let x = v.get(*slot);
                assert!(x == 0.0 || x == 1.0);
            }
        }
    }
    println!("✓ {} combinations keep every group at 0 or 1", inputs.len());
}

#[test]
fn test_groups_cover_all_indicator_slots() {
    let mut slots: Vec<Slot> = INDICATOR_GROUPS.iter().flat_map(|g| g.iter().copied()).collect();
    slots.sort();
    let expected: Vec<Slot> = Slot::ALL[Slot::NUMERIC.len()..].to_vec();
    assert_eq!(slots, expected);
}

#[test]
fn test_slot_names_match_columns() {
    for (i, slot) in Slot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
        assert_eq!(slot.name(), TRAINING_COLUMNS[i]);
        assert_eq!(Slot::from_name(TRAINING_COLUMNS[i]), Some(*slot));
    }
    assert_eq!(Slot::from_name("City_Urban"), None);
    assert!(FeatureSchema::training().matches_training());
}

#[test]
fn test_numeric_identity() {
    println!("\n=== Test: Numeric Identity ===");
    let raw = RawDeliveryInput {
        delivery_person_age: 50,
        delivery_person_ratings: 1.3,
        vehicle_condition: 3,
        multiple_deliveries: 1,
        distance_km: 0.1,
        order_hour: 23,
        order_day_of_week: 6,
        order_day_of_month: 31,
        ..example_input()
    };
    let v = encode(&raw);
    assert_eq!(v.get(Slot::DeliveryPersonAge), 50.0);
    assert_eq!(v.get(Slot::DeliveryPersonRatings), 1.3_f32);
    assert_eq!(v.get(Slot::VehicleCondition), 3.0);
    assert_eq!(v.get(Slot::MultipleDeliveries), 1.0);
    assert_eq!(v.get(Slot::DistanceKm), 0.1_f32);
    assert_eq!(v.get(Slot::OrderHour), 23.0);
    assert_eq!(v.get(Slot::OrderDayOfWeek), 6.0);
    assert_eq!(v.get(Slot::OrderDayOfMonth), 31.0);

    // No clamping at encode time, even for values the form would reject
    let wild = RawDeliveryInput { delivery_person_age: 99, distance_km: 120.0, ..raw };
    let v = encode(&wild);
    assert_eq!(v.get(Slot::DeliveryPersonAge), 99.0);
    assert_eq!(v.get(Slot::DistanceKm), 120.0);
    println!("✓ Numeric slots copy raw values");
}

#[test]
fn test_idempotent() {
    let raw = example_input();
    let a = encode_for_schema(&raw, &FeatureSchema::training());
    let b = encode_for_schema(&raw, &FeatureSchema::training());
    let bits_a: Vec<u32> = a.iter().map(|x| x.to_bits()).collect();
    let bits_b: Vec<u32> = b.iter().map(|x| x.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
    assert_eq!(encode(&raw), encode(&raw));
}

#[test]
fn test_training_align_is_record_order() {
    let v = encode(&example_input());
    let aligned = FeatureSchema::training().align(&v);
    assert_eq!(aligned.as_slice(), v.as_slice());

    for ((slot, x), (i, y)) in v.iter().zip(aligned.iter().enumerate()) {
        assert_eq!(slot.index(), i);
        assert_eq!(x, *y, "{}", slot.name());
    }
    let hot: Vec<&str> = v
        .iter()
        .filter(|(s, x)| *x == 1.0 && !Slot::NUMERIC.contains(s))
        .map(|(s, _)| s.name())
        .collect();
    assert_eq!(hot.len(), 6);
}

#[test]
fn test_nan_sentinels() {
    println!("\n=== Test: NaN Sentinels ===");
    let raw = RawDeliveryInput {
        weather_conditions: Weather::Unknown,
        traffic_density: Traffic::Unknown,
        city: City::Unknown,
        ..example_input()
    };
    let v = encode(&raw);

    for slot in Weather::GROUP {
        let want = if *slot == Slot::WeatherNaN { 1.0 } else { 0.0 };
        assert_eq!(v.get(*slot), want, "{}", slot.name());
    }
    for slot in Traffic::GROUP {
        let want = if *slot == Slot::TrafficNaN { 1.0 } else { 0.0 };
        assert_eq!(v.get(*slot), want, "{}", slot.name());
    }
    for slot in City::GROUP {
        let want = if *slot == Slot::CityNaN { 1.0 } else { 0.0 };
        assert_eq!(v.get(*slot), want, "{}", slot.name());
    }

    let schema = FeatureSchema::training();
    let aligned = schema.align(&v);
    let named = schema.named(&aligned);
    assert_eq!(named["Weatherconditions_conditions NaN"], 1.0);
    assert_eq!(named["City_NaN "], 1.0);
    println!("✓ Sentinels hit their dedicated slots only");
}

#[test]
fn test_unmapped_options_leave_group_cold() {
    println!("\n=== Test: Unmapped Option Fallback ===");
    let raw = RawDeliveryInput {
        weather_conditions: Weather::Cloudy,
        traffic_density: Traffic::High,
        order_type: OrderType::Buffet,
        vehicle_type: VehicleType::Bicycle,
        city: City::Metropolitian,
        ..example_input()
    };
    let v = encode(&raw);

    assert_eq!(v.group_sum(Weather::GROUP), 0.0);
    assert_eq!(v.group_sum(Traffic::GROUP), 0.0);
    assert_eq!(v.group_sum(OrderType::GROUP), 0.0);
    assert_eq!(v.group_sum(VehicleType::GROUP), 0.0);
    assert_eq!(v.group_sum(City::GROUP), 0.0);
    // Festival has a slot for every option
    assert_eq!(v.get(Slot::FestivalNo), 1.0);

    assert_eq!(Weather::Cloudy.slot(), None);
    assert_eq!(OrderType::Buffet.slot(), None);
    assert_eq!(VehicleType::Bicycle.slot(), None);
    assert_eq!(City::Metropolitian.slot(), None);
    println!("✓ Unmapped options encode as an all-zero group");
}

#[test]
fn test_reordered_schema_follows_names() {
    let mut cols: Vec<String> = TRAINING_COLUMNS.iter().rev().map(|c| c.to_string()).collect();
    cols.push("Festival_Maybe ".into());
    let schema = FeatureSchema::new(cols);
    assert!(!schema.matches_training());
    assert_eq!(schema.unknown_columns(), vec!["Festival_Maybe "]);
    assert!(schema.missing_columns().is_empty());

    let raw = example_input();
    let v = encode_for_schema(&raw, &schema);
    let named = schema.named(&v);
    assert_eq!(named["Delivery_person_Age"], 25.0);
    assert_eq!(named["Type_of_order_Meal "], 1.0);
    assert_eq!(named["Festival_Maybe "], 0.0);
    assert_eq!(v[0], 1.0); // "City_Urban " is now first
}
