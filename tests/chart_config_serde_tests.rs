use chartcss::core::{Dataset, LabeledValue};
use chartcss::{ChartConfig, ChartModel, ChartType};

#[test]
fn chart_config_json_round_trip() {
    let config = ChartConfig::new(ChartType::Column)
        .with_heading("Outbound traffic")
        .with_data(Dataset::Nested(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))
        .with_max(10.0)
        .with_stacked(true);

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = ChartConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn config_accepts_the_camel_case_wire_format() {
    let config = ChartConfig::from_json_str(
        r#"{
            "type": "line",
            "data": [20, 40, 10],
            "showSecondaryAxes": 4,
            "reverseData": true,
            "hideData": true
        }"#,
    )
    .expect("wire config");

    assert_eq!(config.chart_type, ChartType::Line);
    assert_eq!(config.data, Dataset::Flat(vec![20.0, 40.0, 10.0]));
    assert_eq!(config.show_secondary_axes, 4);
    assert!(config.reverse_data);
    assert!(config.hide_data);
}

#[test]
fn missing_fields_resolve_to_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("empty config");

    assert_eq!(config.chart_type, ChartType::Bar);
    assert_eq!(config.data, Dataset::Empty);
    assert_eq!(config.max, None);
    assert!(!config.stacked);
    assert!(config.attributes.is_empty());
}

#[test]
fn series_data_deserializes_as_labeled_entries() {
    let config = ChartConfig::from_json_str(
        r#"{
            "type": "bar",
            "seriesData": [
                {"label": "2016-12-25", "value": 20},
                {"label": "2016-12-26", "value": 10}
            ]
        }"#,
    )
    .expect("series config");

    assert_eq!(
        config.series_data,
        Some(vec![
            LabeledValue::new("2016-12-25", 20.0),
            LabeledValue::new("2016-12-26", 10.0),
        ])
    );
}

#[test]
fn unrecognized_attributes_are_captured_in_order() {
    let config = ChartConfig::from_json_str(
        r#"{
            "type": "bar",
            "data": [1, 2],
            "id": "chart-main",
            "aria-label": "Main chart",
            "data-theme": "dark"
        }"#,
    )
    .expect("config with passthrough attributes");

    let keys: Vec<&str> = config.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "aria-label", "data-theme"]);

    let json = config.to_json_pretty().expect("reserialize");
    let restored = ChartConfig::from_json_str(&json).expect("round trip");
    assert_eq!(restored, config);
}

#[test]
fn malformed_wire_data_is_rejected_at_deserialization() {
    let err = ChartConfig::from_json_str(r#"{"data": [1, [2]]}"#)
        .expect_err("mixed-shape data must not deserialize");
    assert!(matches!(err, chartcss::ChartError::Serialization(_)));
}

#[test]
fn model_snapshot_json_round_trip() {
    let config = ChartConfig::new(ChartType::Bar)
        .with_heading("Snapshot")
        .with_data(Dataset::Nested(vec![vec![40.0, 60.0], vec![75.0, 90.0]]))
        .with_attribute("id", serde_json::json!("snap"));
    let model = ChartModel::build(&config).expect("model");

    let json = model.to_json_pretty().expect("model should serialize");
    let restored = ChartModel::from_json_str(&json).expect("model should deserialize");

    assert_eq!(restored, model);
    let keys: Vec<&str> = restored.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id"]);
}
