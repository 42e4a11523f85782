use enum_mapping::{map_enum_to_keys, EnumDescriptor, Variant};

#[test]
fn descriptor_loads_from_json() {
    let descriptor: EnumDescriptor<String> = serde_json::from_str(
        r#"[
            { "name": "Red", "repr": "RED" },
            { "name": "Blue", "repr": "BLUE" }
        ]"#,
    )
    .unwrap();
    assert_eq!(descriptor.repr_of("Blue").map(String::as_str), Some("BLUE"));

    let mapping = map_enum_to_keys(descriptor);
    assert_eq!(mapping.parse("Red").map(String::as_str), Ok("RED"));
}

#[test]
fn numeric_descriptor_keeps_order() {
    let descriptor = EnumDescriptor::new().variant("Circle", 0i64).variant("Square", 1);
    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Circle", "repr": 0 },
            { "name": "Square", "repr": 1 }
        ])
    );
    let back: EnumDescriptor<i64> = serde_json::from_value(json).unwrap();
    assert_eq!(
        back.iter().cloned().collect::<Vec<_>>(),
        [
            Variant { name: "Circle".into(), repr: 0 },
            Variant { name: "Square".into(), repr: 1 },
        ]
    );
}
