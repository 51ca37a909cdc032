use core::fmt;

/// Integer pixel coordinate in image space.
///
/// Ports are stored at whole pixels; anything finer is truncated toward zero
/// when it enters the graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate a sub-pixel position toward zero.
    ///
    /// Out-of-range values saturate and NaN maps to 0, following `as` casts.
    pub fn truncate(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Float position, used for click queries and centroids.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of a set of pixels, or `None` for an empty set.
    pub fn mean<I>(pixels: I) -> Option<Self>
    where
        I: IntoIterator<Item = Pixel>,
    {
        let (sum_x, sum_y, count) = pixels
            .into_iter()
            .fold((0.0, 0.0, 0usize), |(sx, sy, n), p| {
                (sx + f64::from(p.x), sy + f64::from(p.y), n + 1)
            });
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self::new(sum_x / n, sum_y / n))
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        p.to_point()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Pixel;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Documents carry pixels as `[x, y]`. Hosts sometimes hand over float
    // pointer positions, so accept any JSON number and truncate.
    impl Serialize for Pixel {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            [self.x, self.y].serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Pixel {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
            Ok(Pixel::truncate(x, y))
        }
    }
}
