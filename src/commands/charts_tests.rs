use indexmap::IndexMap;

use crate::chart::project;
use crate::dataset::Summary;

use super::*;

fn bundle() -> ChartBundle {
    let mut type_distribution = IndexMap::new();
    type_distribution.insert("Pump".to_string(), 2);
    type_distribution.insert("Valve".to_string(), 1);
    let summary = Summary {
        total_count: 3,
        avg_flowrate: 20.0,
        avg_pressure: 4.0,
        avg_temperature: 80.0,
        min_flowrate: 10.0,
        max_flowrate: 30.0,
        min_pressure: 2.0,
        max_pressure: 6.0,
        min_temperature: 60.0,
        max_temperature: 100.0,
        type_distribution,
    };
    project(&summary)
}

#[test]
fn svg_charts_land_in_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let message = write_svg_charts(dir.path(), &bundle()).unwrap();

    for name in ["type_distribution.svg", "averages.svg", "ranges.svg"] {
        let path = dir.path().join(name);
        assert!(path.exists(), "missing {name}");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.ends_with("</svg>"));
        assert!(message.contains(name));
    }
}

#[test]
fn svg_output_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports").join("charts");
    write_svg_charts(&nested, &bundle()).unwrap();
    assert!(nested.join("averages.svg").exists());
}

#[test]
fn pie_chart_file_reflects_type_distribution() {
    let dir = tempfile::tempdir().unwrap();
    write_svg_charts(dir.path(), &bundle()).unwrap();

    let pie = fs::read_to_string(dir.path().join("type_distribution.svg")).unwrap();
    assert!(pie.contains("Pump"));
    assert!(pie.contains("Valve"));

    let ranges = fs::read_to_string(dir.path().join("ranges.svg")).unwrap();
    assert!(ranges.contains("Minimum"));
    assert!(ranges.contains("Maximum"));
    assert!(ranges.contains("Temperature"));
}
