use super::*;

const ROW_JSON: &str = r#"{
    "Equipment Name": "P-101",
    "Type": "Pump",
    "Flowrate": 12.5,
    "Pressure": 4.2,
    "Temperature": 85.0
}"#;

#[test]
fn column_labels() {
    assert_eq!(Column::Name.label(), "Equipment Name");
    assert_eq!(Column::Type.label(), "Type");
    assert_eq!(Column::Flowrate.label(), "Flowrate");
    assert_eq!(Column::Pressure.label(), "Pressure");
    assert_eq!(Column::Temperature.label(), "Temperature");
}

#[test]
fn column_numeric_classification() {
    assert!(!Column::Name.is_numeric());
    assert!(!Column::Type.is_numeric());
    assert!(Column::Flowrate.is_numeric());
    assert!(Column::Pressure.is_numeric());
    assert!(Column::Temperature.is_numeric());
}

#[test]
fn column_all_covers_every_variant() {
    assert_eq!(Column::ALL.len(), 5);
}

#[test]
fn record_deserializes_backend_keys() {
    let record: EquipmentRecord = serde_json::from_str(ROW_JSON).unwrap();
    assert_eq!(record.name, "P-101");
    assert_eq!(record.kind, "Pump");
    assert!((record.flowrate - 12.5).abs() < f64::EPSILON);
    assert!((record.pressure - 4.2).abs() < f64::EPSILON);
    assert!((record.temperature - 85.0).abs() < f64::EPSILON);
}

#[test]
fn record_serializes_with_display_keys() {
    let record: EquipmentRecord = serde_json::from_str(ROW_JSON).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("Equipment Name").is_some());
    assert!(json.get("Type").is_some());
    assert!(json.get("name").is_none());
}

#[test]
fn dataset_deserializes_full_payload() {
    let payload = format!(
        r#"{{
            "id": 7,
            "filename": "equipment.csv",
            "upload_date": "2026-08-01T10:30:00Z",
            "data": [{ROW_JSON}],
            "summary": {{
                "total_count": 1,
                "avg_flowrate": 12.5,
                "avg_pressure": 4.2,
                "avg_temperature": 85.0,
                "min_flowrate": 12.5,
                "max_flowrate": 12.5,
                "min_pressure": 4.2,
                "max_pressure": 4.2,
                "min_temperature": 85.0,
                "max_temperature": 85.0,
                "type_distribution": {{"Pump": 1}}
            }}
        }}"#
    );

    let dataset: Dataset = serde_json::from_str(&payload).unwrap();
    assert_eq!(dataset.id, 7);
    assert_eq!(dataset.filename, "equipment.csv");
    assert_eq!(dataset.rows.len(), 1);
    assert_eq!(dataset.summary.total_count, 1);
    assert_eq!(dataset.summary.type_distribution.get("Pump"), Some(&1));
}

#[test]
fn summary_distribution_preserves_json_order() {
    let json = r#"{
        "total_count": 3,
        "avg_flowrate": 0.0,
        "avg_pressure": 0.0,
        "avg_temperature": 0.0,
        "min_flowrate": 0.0,
        "max_flowrate": 0.0,
        "min_pressure": 0.0,
        "max_pressure": 0.0,
        "min_temperature": 0.0,
        "max_temperature": 0.0,
        "type_distribution": {"Valve": 1, "Pump": 1, "Compressor": 1}
    }"#;
    let summary: Summary = serde_json::from_str(json).unwrap();
    let kinds: Vec<_> = summary.type_distribution.keys().cloned().collect();
    assert_eq!(kinds, ["Valve", "Pump", "Compressor"]);
}

#[test]
fn column_value_enum_parses_cli_names() {
    use clap::ValueEnum;
    assert_eq!(Column::from_str("flowrate", true).unwrap(), Column::Flowrate);
    assert_eq!(Column::from_str("name", true).unwrap(), Column::Name);
    assert!(Column::from_str("bogus", true).is_err());
}
