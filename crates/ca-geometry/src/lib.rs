//! ca-geometry: maps pixel positions onto graph elements.
//!
//! The hit tester only reads the graph; it keeps no entity state of its own.

pub mod hit;
pub mod radii;

pub use ca_core::{distance, point_to_segment_distance};
pub use hit::{Hit, HitTester, hit_test};
pub use radii::HitRadii;
