use serde::{Deserialize, Serialize};

use crate::core::{Axis, ClipRect, Point2};

/// Which side of a clip boundary survives a half-plane clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeepSide {
    /// Keeps `p[axis] >= boundary`.
    AtLeast,
    /// Keeps `p[axis] <= boundary`.
    AtMost,
}

impl KeepSide {
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::AtLeast => 1.0,
            Self::AtMost => -1.0,
        }
    }

    fn admits(self, point: Point2, axis: Axis, boundary: f64) -> bool {
        self.sign() * point.coord(axis) >= self.sign() * boundary
    }
}

/// Sutherland-Hodgman clip of a cyclic polygon against one axis-aligned
/// half-plane.
///
/// The walk starts at the closing edge (last vertex to first) so the output
/// keeps the input's vertex order. A polygon fully outside yields an empty
/// vector; one fully inside yields its own vertices.
#[must_use]
pub fn clip_half_plane(polygon: &[Point2], axis: Axis, boundary: f64, side: KeepSide) -> Vec<Point2> {
    let Some(&last) = polygon.last() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(polygon.len() + 1);
    let mut previous = last;
    let mut previous_inside = side.admits(previous, axis, boundary);

    for &current in polygon {
        let current_inside = side.admits(current, axis, boundary);
        if current_inside != previous_inside {
            out.push(edge_intersection(previous, current, axis, boundary));
        }
        if current_inside {
            out.push(current);
        }
        previous = current;
        previous_inside = current_inside;
    }

    out
}

/// Point where the edge `from -> to` crosses `axis = boundary`.
///
/// An edge with no extent along `axis` uses interpolation parameter 0.
fn edge_intersection(from: Point2, to: Point2, axis: Axis, boundary: f64) -> Point2 {
    let span = to.coord(axis) - from.coord(axis);
    let t = if span == 0.0 {
        0.0
    } else {
        (boundary - from.coord(axis)) / span
    };

    let other = axis.other();
    let other_value = from.coord(other) + t * (to.coord(other) - from.coord(other));
    Point2::default()
        .with_coord(axis, boundary)
        .with_coord(other, other_value)
}

/// Clips a polygon to `rect` by chaining the four bounding half-planes.
#[must_use]
pub fn clip_to_rect(polygon: &[Point2], rect: ClipRect) -> Vec<Point2> {
    let clipped = clip_half_plane(polygon, Axis::X, rect.xmin, KeepSide::AtLeast);
    let clipped = clip_half_plane(&clipped, Axis::X, rect.xmax, KeepSide::AtMost);
    let clipped = clip_half_plane(&clipped, Axis::Y, rect.ymin, KeepSide::AtLeast);
    clip_half_plane(&clipped, Axis::Y, rect.ymax, KeepSide::AtMost)
}

/// Liang-Barsky clip of the segment `p -> q` against `rect`.
///
/// Returns `None` when no part of the segment lies inside the rectangle.
#[must_use]
pub fn clip_segment(p: Point2, q: Point2, rect: ClipRect) -> Option<(Point2, Point2)> {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    let edges = [
        (-dx, p.x - rect.xmin),
        (dx, rect.xmax - p.x),
        (-dy, p.y - rect.ymin),
        (dy, rect.ymax - p.y),
    ];
    for (denominator, numerator) in edges {
        if denominator == 0.0 {
            if numerator < 0.0 {
                return None;
            }
            continue;
        }
        let t = numerator / denominator;
        if denominator < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    // Unclipped endpoints are returned as given so adjacent segments still
    // compare equal at their shared vertex.
    let at = |t: f64| Point2::new(p.x + t * dx, p.y + t * dy);
    let start = if t_enter > 0.0 { at(t_enter) } else { p };
    let end = if t_exit < 1.0 { at(t_exit) } else { q };
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::{KeepSide, clip_half_plane, clip_segment, clip_to_rect};
    use crate::core::{Axis, ClipRect, Point2};

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn empty_polygon_stays_empty() {
        assert!(clip_half_plane(&[], Axis::X, 0.0, KeepSide::AtLeast).is_empty());
    }

    #[test]
    fn half_plane_clip_emits_crossings_in_walk_order() {
        let clipped = clip_half_plane(&square(), Axis::X, 5.0, KeepSide::AtLeast);
        assert_eq!(
            clipped,
            vec![
                Point2::new(5.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(5.0, 10.0),
            ]
        );
    }

    #[test]
    fn coincident_vertices_clip_without_nan() {
        let polygon = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let clipped = clip_half_plane(&polygon, Axis::X, 5.0, KeepSide::AtLeast);
        assert!(clipped.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert!(clipped.iter().all(|p| p.x >= 5.0));
        assert_eq!(clipped.len(), 5);
    }

    #[test]
    fn rect_clip_of_straddling_triangle_stays_in_bounds() {
        let triangle = vec![
            Point2::new(-5.0, -5.0),
            Point2::new(15.0, 5.0),
            Point2::new(5.0, 15.0),
        ];
        let rect = ClipRect::new(0.0, 10.0, 0.0, 10.0);
        let clipped = clip_to_rect(&triangle, rect);
        assert!(clipped.len() >= 3);
        assert!(clipped.iter().all(|p| rect.contains(*p)));
    }

    #[test]
    fn segment_clip_trims_both_ends() {
        let rect = ClipRect::new(0.0, 10.0, 0.0, 10.0);
        let (a, b) = clip_segment(Point2::new(-5.0, 5.0), Point2::new(15.0, 5.0), rect)
            .expect("segment crosses rect");
        assert_eq!(a, Point2::new(0.0, 5.0));
        assert_eq!(b, Point2::new(10.0, 5.0));
    }

    #[test]
    fn segment_inside_rect_keeps_exact_endpoints() {
        let rect = ClipRect::new(0.0, 1.0, 0.0, 1.0);
        let (p, q) = (Point2::new(0.3, 0.7), Point2::new(0.9, 0.2));
        assert_eq!(clip_segment(p, q, rect), Some((p, q)));
    }

    #[test]
    fn segment_clip_rejects_outside_segment() {
        let rect = ClipRect::new(0.0, 10.0, 0.0, 10.0);
        assert!(clip_segment(Point2::new(-5.0, -1.0), Point2::new(15.0, -1.0), rect).is_none());
        assert!(clip_segment(Point2::new(11.0, 0.0), Point2::new(20.0, 10.0), rect).is_none());
    }
}
