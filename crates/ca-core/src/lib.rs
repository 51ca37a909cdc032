//! ca-core: shared primitives for circuit annotation.
//!
//! Contains:
//! - point (integer pixel coordinates and float query points)
//! - bbox (normalized axis-aligned boxes)
//! - metric (Euclidean distance helpers)

pub mod bbox;
pub mod metric;
pub mod point;

// Re-exports: nice ergonomics for downstream crates
pub use bbox::BoundingBox;
pub use metric::{distance, point_to_segment_distance};
pub use point::{Pixel, Point};
