use serde::{Deserialize, Serialize};

use super::PRECISION;

/// Ground-plane footprint in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10_f64.powi(precision);
    (value * factor).round() / factor
}

/// Pads a surface by `margin` on both axes. `margin` is never negative.
pub fn compute_footprint(width: f64, depth: f64, margin: f64) -> Footprint {
    Footprint {
        width: round_to(width + margin, PRECISION),
        depth: round_to(depth + margin, PRECISION),
    }
}
