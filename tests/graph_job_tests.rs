use simple_graph::api::build_bar_chart;
use simple_graph::core::Point;
use simple_graph::render::LayerKind;
use simple_graph::{GraphAttributes, GraphError, GraphJob, GraphOption};

#[test]
fn bar_job_builds_the_same_frame_as_the_builder() {
    let job = GraphJob::from_json_str(
        r#"{
            "kind": "bar",
            "attributes": {"width": 200, "height": 100, "options": [{"DeltaX": 20.0}, {"YTickmarks": 3}]},
            "values": [1, 2, 3]
        }"#,
    )
    .expect("bar job");

    assert_eq!(job.kind_name(), "bar");
    let attributes = GraphAttributes::new(200, 100)
        .with_option(GraphOption::DeltaX(20.0))
        .with_option(GraphOption::YTickmarks(3));
    assert_eq!(job.attributes(), &attributes);
    assert_eq!(job.build(), build_bar_chart(&attributes, &[1.0, 2.0, 3.0]));
}

#[test]
fn line_and_scatter_jobs_take_points() {
    let line = GraphJob::from_json_str(
        r#"{"kind": "line", "attributes": {"width": 100, "height": 100},
            "points": [{"x": 0, "y": 0}, {"x": 10, "y": 10}, {"x": 20, "y": 0}]}"#,
    )
    .expect("line job");
    let frame = line.build();
    assert_eq!(frame.layer(LayerKind::Series).expect("series").lines().count(), 2);

    let scatter = GraphJob::Scatter {
        attributes: GraphAttributes::new(50, 50),
        points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
    };
    let json = scatter.to_json_pretty().expect("serialize job");
    assert!(json.contains("\"kind\": \"scatter\""));
    let parsed = GraphJob::from_json_str(&json).expect("reparse");
    assert_eq!(parsed, scatter);
    assert_eq!(parsed.build().layer(LayerKind::Series).expect("dots").rects().count(), 2);
}

#[test]
fn malformed_jobs_report_serialization_errors() {
    for input in [
        r#"{"kind": "pie", "attributes": {"width": 1, "height": 1}}"#,
        r#"{"kind": "bar", "values": [1]}"#,
        "[]",
    ] {
        let err = GraphJob::from_json_str(input).expect_err("must fail");
        assert!(matches!(err, GraphError::Serialization(_)));
        assert!(err.to_string().contains("failed to parse graph job"));
    }
}
