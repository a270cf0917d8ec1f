use super::*;

fn record(name: &str, kind: &str, flowrate: f64, pressure: f64, temperature: f64) -> EquipmentRecord {
    EquipmentRecord {
        name: name.to_string(),
        kind: kind.to_string(),
        flowrate,
        pressure,
        temperature,
    }
}

#[test]
fn aggregate_empty_rows_is_insufficient_data() {
    let result = aggregate(&[]);
    assert!(matches!(result, Err(EquiviewError::InsufficientData)));
}

#[test]
fn aggregate_single_row() {
    let rows = vec![record("P-101", "Pump", 12.5, 4.0, 85.0)];
    let summary = aggregate(&rows).unwrap();

    assert_eq!(summary.total_count, 1);
    assert!((summary.avg_flowrate - 12.5).abs() < f64::EPSILON);
    assert!((summary.min_flowrate - 12.5).abs() < f64::EPSILON);
    assert!((summary.max_flowrate - 12.5).abs() < f64::EPSILON);
    assert_eq!(summary.type_distribution.get("Pump"), Some(&1));
}

#[test]
fn aggregate_computes_means_and_extrema() {
    let rows = vec![
        record("P-101", "Pump", 10.0, 2.0, 60.0),
        record("P-102", "Pump", 20.0, 4.0, 80.0),
        record("V-201", "Valve", 30.0, 6.0, 100.0),
    ];
    let summary = aggregate(&rows).unwrap();

    assert_eq!(summary.total_count, 3);
    assert!((summary.avg_flowrate - 20.0).abs() < f64::EPSILON);
    assert!((summary.avg_pressure - 4.0).abs() < f64::EPSILON);
    assert!((summary.avg_temperature - 80.0).abs() < f64::EPSILON);
    assert!((summary.min_flowrate - 10.0).abs() < f64::EPSILON);
    assert!((summary.max_flowrate - 30.0).abs() < f64::EPSILON);
    assert!((summary.min_pressure - 2.0).abs() < f64::EPSILON);
    assert!((summary.max_pressure - 6.0).abs() < f64::EPSILON);
    assert!((summary.min_temperature - 60.0).abs() < f64::EPSILON);
    assert!((summary.max_temperature - 100.0).abs() < f64::EPSILON);
}

#[test]
fn aggregate_counts_types() {
    let rows = vec![
        record("P-101", "Pump", 1.0, 1.0, 1.0),
        record("V-201", "Valve", 1.0, 1.0, 1.0),
        record("P-102", "Pump", 1.0, 1.0, 1.0),
        record("H-301", "HeatExchanger", 1.0, 1.0, 1.0),
    ];
    let summary = aggregate(&rows).unwrap();

    assert_eq!(summary.type_distribution.get("Pump"), Some(&2));
    assert_eq!(summary.type_distribution.get("Valve"), Some(&1));
    assert_eq!(summary.type_distribution.get("HeatExchanger"), Some(&1));
    let total: u64 = summary.type_distribution.values().sum();
    assert_eq!(total, summary.total_count);
}

#[test]
fn aggregate_distribution_keeps_first_seen_order() {
    let rows = vec![
        record("V-201", "Valve", 1.0, 1.0, 1.0),
        record("P-101", "Pump", 1.0, 1.0, 1.0),
        record("V-202", "Valve", 1.0, 1.0, 1.0),
        record("C-401", "Compressor", 1.0, 1.0, 1.0),
    ];
    let summary = aggregate(&rows).unwrap();

    let kinds: Vec<_> = summary.type_distribution.keys().cloned().collect();
    assert_eq!(kinds, ["Valve", "Pump", "Compressor"]);
}

#[test]
fn aggregate_handles_negative_values() {
    let rows = vec![
        record("T-101", "Tank", -5.0, 1.0, -40.0),
        record("T-102", "Tank", 5.0, 3.0, 40.0),
    ];
    let summary = aggregate(&rows).unwrap();

    assert!((summary.avg_flowrate - 0.0).abs() < f64::EPSILON);
    assert!((summary.min_temperature - -40.0).abs() < f64::EPSILON);
    assert!((summary.max_temperature - 40.0).abs() < f64::EPSILON);
}

#[test]
fn aggregate_is_case_sensitive_on_type_names() {
    let rows = vec![
        record("A", "pump", 1.0, 1.0, 1.0),
        record("B", "Pump", 1.0, 1.0, 1.0),
    ];
    let summary = aggregate(&rows).unwrap();

    // Distinct spellings are distinct categories, as in the backend
    assert_eq!(summary.type_distribution.len(), 2);
}
