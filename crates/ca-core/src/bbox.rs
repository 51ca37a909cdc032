use crate::point::{Pixel, Point};

/// Axis-aligned box, always stored normalized (`min <= max` on both axes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Build a box from two opposite corners given in any order.
    pub fn from_corners(a: Pixel, b: Pixel) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Build a box from `[x1, y1, x2, y2]` in any corner order.
    pub fn from_array([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self::from_corners(Pixel::new(x1, y1), Pixel::new(x2, y2))
    }

    pub fn to_array(self) -> [i32; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    pub fn width(&self) -> u64 {
        i64::from(self.max_x).abs_diff(i64::from(self.min_x))
    }

    pub fn height(&self) -> u64 {
        i64::from(self.max_y).abs_diff(i64::from(self.min_y))
    }

    /// Each side is below 2^32, so the product always fits.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Inclusive containment: points on the border are inside.
    pub fn contains(&self, p: Point) -> bool {
        f64::from(self.min_x) <= p.x
            && p.x <= f64::from(self.max_x)
            && f64::from(self.min_y) <= p.y
            && p.y <= f64::from(self.max_y)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::BoundingBox;
    use crate::point::Pixel;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for BoundingBox {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.to_array().serialize(serializer)
        }
    }

    // Boxes read from documents may list their corners in any order.
    impl<'de> Deserialize<'de> for BoundingBox {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let [x1, y1, x2, y2] = <[f64; 4]>::deserialize(deserializer)?;
            Ok(BoundingBox::from_corners(
                Pixel::truncate(x1, y1),
                Pixel::truncate(x2, y2),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let b = BoundingBox::from_array([100, 80, 10, 20]);
        assert_eq!(b.to_array(), [10, 20, 100, 80]);
        assert_eq!(b.width(), 90);
        assert_eq!(b.height(), 60);
        assert_eq!(b.area(), 5400);
    }

    #[test]
    fn containment_is_inclusive() {
        let b = BoundingBox::from_array([0, 0, 100, 100]);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(100.0, 100.0)));
        assert!(b.contains(Point::new(50.0, 100.0)));
        assert!(!b.contains(Point::new(100.5, 50.0)));
        assert!(!b.contains(Point::new(-0.1, 50.0)));
    }

    #[test]
    fn degenerate_box_has_zero_area() {
        let b = BoundingBox::from_array([5, 5, 5, 40]);
        assert_eq!(b.area(), 0);
        assert!(b.contains(Point::new(5.0, 20.0)));
    }

    #[test]
    fn full_range_box_area_does_not_overflow() {
        let b = BoundingBox::from_array([i32::MIN, i32::MIN, i32::MAX, i32::MAX]);
        assert_eq!(b.width(), u64::from(u32::MAX));
        assert_eq!(b.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
        assert!(b.area() > BoundingBox::from_array([0, 0, 10, 10]).area());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn out_of_range_corners_clamp_on_load() {
        let b: BoundingBox = serde_json::from_str("[-3e9, -3e9, 3e9, 3e9]").unwrap();
        assert_eq!(b.to_array(), [i32::MIN, i32::MIN, i32::MAX, i32::MAX]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unordered_box_normalizes_on_load() {
        let b: BoundingBox = serde_json::from_str("[50, 60, 10, 20]").unwrap();
        assert_eq!(b.to_array(), [10, 20, 50, 60]);
        assert_eq!(serde_json::to_string(&b).unwrap(), "[10,20,50,60]");
    }
}
