//! End-to-end tests for the run-output data pipeline: parse a CSV
//! artifact, downsample it for plotting, and format axis ticks.

use runviz::dataset::{self, CellValue, ColumnScale, ColumnType};
use runviz::graph::{downsample, format_axis_value, graph_interval, TickInterval};
use runviz::run::{resolve_run_state, PipelineRun, RunState};

/// Builds a three-column artifact: a time axis, a reading and a label.
fn sensor_artifact(rows: usize) -> String {
    let mut csv_text = String::from("timestamp,reading,sensor\n");
    for i in 0..rows {
        let unix = 1700000000 + (i as i64) * 60;
        let instant = chrono::DateTime::from_timestamp(unix, 0).expect("valid instant");
        csv_text.push_str(&format!(
            "{},{:.2},unit-{}\n",
            instant.format("%Y-%m-%dT%H:%M:%SZ"),
            0.5 + i as f64,
            i % 3
        ));
    }
    csv_text
}

#[tokio::test]
async fn test_artifact_flows_from_parse_to_axis_labels() {
    let dataset = dataset::parse(sensor_artifact(100)).await.expect("parses");

    assert_eq!(dataset.len(), 100);
    assert_eq!(dataset.column_type("timestamp"), Some(ColumnType::Time));
    assert_eq!(dataset.column_type("reading"), Some(ColumnType::Number));
    assert_eq!(dataset.column_type("sensor"), Some(ColumnType::Category));
    assert_eq!(dataset.scales["timestamp"], ColumnScale::Time);

    let points = downsample(&dataset.rows, None, None, 8);
    assert_eq!(points.first(), dataset.rows.first());
    assert_eq!(points.last(), dataset.rows.last());
    assert!(points.len() < dataset.len());

    // First tick of the time axis renders as a calendar date.
    let first_tick = &points[0]["timestamp"];
    assert_eq!(
        format_axis_value(first_tick, dataset.is_time_column("timestamp")),
        "11/14/2023 10:13:20 PM"
    );

    // A reading renders with four fractional digits, a label passes
    // through.
    assert_eq!(format_axis_value(&points[0]["reading"], false), "0.5000");
    assert_eq!(
        format_axis_value(&CellValue::Text("unit-1".into()), false),
        "unit-1"
    );

    assert_eq!(graph_interval(points.len()), TickInterval::Every(2));
}

#[tokio::test]
async fn test_windowed_preview_keeps_small_slices_intact() {
    let dataset = dataset::parse(sensor_artifact(50)).await.expect("parses");

    let slice = downsample(&dataset.rows, Some(10), Some(15), 8);
    assert_eq!(slice.len(), 5);
    assert_eq!(slice[0], dataset.rows[10]);
    assert_eq!(slice[4], dataset.rows[14]);
}

#[tokio::test]
async fn test_run_record_resolves_alongside_artifact() {
    let run: PipelineRun = serde_json::from_str(
        r#"{
            "uuid": "run-42",
            "artifact": "sensors.csv",
            "states": [
                {"state": "COMPLETED", "created_at": "2023-11-15T01:13:20Z"},
                {"state": "PENDING", "created_at": "2023-11-14T22:12:00Z"},
                {"state": "RUNNING", "created_at": "2023-11-14T22:13:20Z"}
            ]
        }"#,
    )
    .expect("deserializes");

    let resolved = resolve_run_state(run);

    assert_eq!(resolved.status, Some(RunState::Completed));
    assert_eq!(
        resolved.started_at.map(|t| t.timestamp()),
        Some(1700000000)
    );
    assert_eq!(
        resolved.completed_at.map(|t| t.timestamp()),
        Some(1700000000 + 3 * 3600)
    );
    assert_eq!(resolved.duration.as_deref(), Some("3 hours"));
    assert_eq!(resolved.metadata["artifact"], serde_json::json!("sensors.csv"));
}
