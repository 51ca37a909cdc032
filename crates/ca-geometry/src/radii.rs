use serde::{Deserialize, Serialize};

/// Pick radii in pixels for each kind of target.
///
/// External ports get the widest radius because they sit on the image edge;
/// branches get the narrowest so they do not swallow nearby ports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitRadii {
    pub connection_center: f64,
    pub external_port: f64,
    pub component_port: f64,
    pub connection_branch: f64,
}

impl Default for HitRadii {
    fn default() -> Self {
        Self {
            connection_center: 8.0,
            external_port: 10.0,
            component_port: 8.0,
            connection_branch: 5.0,
        }
    }
}
