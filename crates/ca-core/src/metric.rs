//! Euclidean helpers shared by the hit tester.

use crate::point::Point;

/// Straight-line distance between two points.
pub fn distance(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Distance from `p` to the closed segment `a`-`b`.
///
/// The projection parameter is clamped to [0, 1] so points beyond either end
/// measure to that end. A zero-length segment is just a point.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_four_five() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn perpendicular_foot_inside_segment() {
        let d = point_to_segment_distance(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(d, 3.0);
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(point_to_segment_distance(Point::new(-3.0, 4.0), a, b), 5.0);
        assert_eq!(point_to_segment_distance(Point::new(13.0, 4.0), a, b), 5.0);
    }

    #[test]
    fn zero_length_segment() {
        let a = Point::new(2.0, 2.0);
        assert_eq!(point_to_segment_distance(Point::new(5.0, 6.0), a, a), 5.0);
    }

    proptest! {
        #[test]
        fn segment_distance_never_exceeds_endpoint_distance(
            px in -500.0f64..500.0, py in -500.0f64..500.0,
            ax in -500.0f64..500.0, ay in -500.0f64..500.0,
            bx in -500.0f64..500.0, by in -500.0f64..500.0,
        ) {
            let p = Point::new(px, py);
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let d = point_to_segment_distance(p, a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= distance(p, a) + 1e-9);
            prop_assert!(d <= distance(p, b) + 1e-9);
        }
    }
}
