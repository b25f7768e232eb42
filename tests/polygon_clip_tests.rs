use sciplot_rs::core::{Axis, ClipRect, KeepSide, Point2, clip_half_plane, clip_to_rect};

fn square(size: f64) -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(size, 0.0),
        Point2::new(size, size),
        Point2::new(0.0, size),
    ]
}

fn same_vertex_set(a: &[Point2], b: &[Point2]) -> bool {
    a.len() == b.len() && a.iter().all(|p| b.contains(p))
}

#[test]
fn square_clipped_at_x_five_keeps_right_half() {
    let clipped = clip_half_plane(&square(10.0), Axis::X, 5.0, KeepSide::AtLeast);

    assert_eq!(clipped.len(), 4);
    assert!(clipped.iter().all(|p| p.x == 5.0 || p.x == 10.0));
    assert!(same_vertex_set(
        &clipped,
        &[
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(5.0, 10.0),
        ]
    ));
}

#[test]
fn polygon_inside_rect_is_unchanged() {
    let polygon = vec![
        Point2::new(2.0, 2.0),
        Point2::new(8.0, 3.0),
        Point2::new(5.0, 7.0),
    ];
    let clipped = clip_to_rect(&polygon, ClipRect::new(0.0, 10.0, 0.0, 10.0));
    assert!(same_vertex_set(&clipped, &polygon));
}

#[test]
fn polygon_outside_any_half_plane_is_empty() {
    let polygon = square(1.0);
    assert!(clip_half_plane(&polygon, Axis::X, 2.0, KeepSide::AtLeast).is_empty());
    assert!(clip_half_plane(&polygon, Axis::X, -1.0, KeepSide::AtMost).is_empty());
    assert!(clip_half_plane(&polygon, Axis::Y, 5.0, KeepSide::AtLeast).is_empty());
    assert!(clip_half_plane(&polygon, Axis::Y, -0.5, KeepSide::AtMost).is_empty());
    assert!(clip_to_rect(&polygon, ClipRect::new(3.0, 4.0, 3.0, 4.0)).is_empty());
}

#[test]
fn upper_bound_clip_interpolates_other_coordinate() {
    let triangle = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(0.0, 4.0),
    ];
    let clipped = clip_half_plane(&triangle, Axis::Y, 2.0, KeepSide::AtMost);
    assert!(same_vertex_set(
        &clipped,
        &[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    ));
}

#[test]
fn rect_clip_is_idempotent() {
    let polygon = vec![
        Point2::new(-3.0, 4.0),
        Point2::new(6.0, -2.0),
        Point2::new(14.0, 5.0),
        Point2::new(5.0, 13.0),
    ];
    let rect = ClipRect::new(0.0, 10.0, 0.0, 10.0);
    let once = clip_to_rect(&polygon, rect);
    let twice = clip_to_rect(&once, rect);
    assert!(!once.is_empty());
    assert_eq!(once, twice);
}
