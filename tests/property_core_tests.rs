use proptest::prelude::*;
use simple_graph::core::{DataWindow, Point, rescale, segments, tick_positions, translate};

fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec(
        (-1_000.0f64..1_000.0, -1_000.0f64..1_000.0).prop_map(Point::from),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn segment_count_is_len_minus_one(points in points_strategy(64)) {
        let segments = segments(&points);
        prop_assert_eq!(segments.len(), points.len().saturating_sub(1));
        for (index, segment) in segments.iter().enumerate() {
            prop_assert_eq!(segment.start, points[index]);
            prop_assert_eq!(segment.end, points[index + 1]);
        }
    }

    #[test]
    fn inferred_window_bounds_every_point(points in points_strategy(64)) {
        prop_assume!(!points.is_empty());
        let window = DataWindow::from_points(&points);
        for point in &points {
            prop_assert!(window.contains(*point));
        }
    }

    #[test]
    fn tick_positions_are_monotonic_and_pinned(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        count in 2usize..32
    ) {
        let max = min + span;
        let positions = tick_positions(min, max, count);
        prop_assert_eq!(positions.len(), count);
        prop_assert_eq!(positions[0], min);
        prop_assert_eq!(positions[count - 1], max);
        for pair in positions.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn translate_then_rescale_differs_for_nonzero_offsets(
        points in points_strategy(16),
        dx in 1.0f64..50.0,
        k in 2.0f64..10.0
    ) {
        prop_assume!(!points.is_empty());
        let a = rescale(k, k, &translate(dx, dx, &points));
        let b = translate(dx, dx, &rescale(k, k, &points));
        prop_assert_ne!(a, b);
    }
}
