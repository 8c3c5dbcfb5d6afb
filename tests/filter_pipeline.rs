use audio_event_filter::{Detection, EventFilter, FilterConfig, LabelExporter};
use std::collections::BTreeMap;
use std::fs;

#[test]
fn default_config_filters_merges_and_ranks() {
    let raw = r#"[
        {"label": "Tick", "score": 0.9},
        {"label": "Tick-tock", "score": 0.95},
        {"label": "Dog", "score": 0.99},
        {"label": "Static", "score": 0.8},
        {"label": "Children shouting", "score": 0.45},
        {"label": "Baby cry, infant cry", "score": 0.72}
    ]"#;
    let events: Vec<Detection> = serde_json::from_str(raw).unwrap();

    let filter = EventFilter::new(FilterConfig::default());
    let results = filter.apply(&events);

    let labels: Vec<&str> = results.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["Dog", "Tick-tock", "Child speech"]);
    assert_eq!(results[2].score, 0.72);
}

#[test]
fn records_with_missing_fields_are_defaulted() {
    let raw = r#"[{"score": 0.5}, {"label": "Dog"}]"#;
    let events: Vec<Detection> = serde_json::from_str(raw).unwrap();

    assert_eq!(events[0].label, "");
    assert_eq!(events[1].score, 0.0);

    let results = EventFilter::new(FilterConfig::default()).apply(&events);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Detection::new("", 0.5));
}

#[test]
fn exporter_round_trips_through_model_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"id2label": {"0": "Dog", "1": "Speech", "2": "Tick-tock"}}"#,
    )
    .unwrap();

    let output = dir.path().join("all_labels.json");
    let labels = LabelExporter::new(dir.path()).export_to(&output).unwrap();

    assert_eq!(labels.len(), 3);
    let written: BTreeMap<String, String> =
        serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(written, labels);
}
