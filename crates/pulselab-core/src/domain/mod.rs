pub mod errors;

pub use errors::{CoreError, CoreErrorCategory, CoreResult};

use serde::{Deserialize, Serialize};

/// Plain 2-vector used for reciprocal lattice vectors and k-space positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);
}
