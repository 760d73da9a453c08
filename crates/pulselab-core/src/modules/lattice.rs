//! Reciprocal-lattice geometry for 2D crystal families.
//!
//! A `LatticeGeometry` is regenerated wholesale whenever the family or a
//! lattice constant changes; nothing is mutated incrementally. Zero or
//! negative constants are not rejected; the resulting non-finite coordinates
//! propagate to the consumer the same way degenerate converter inputs do.

use crate::common::constants::PI2;
use crate::domain::{CoreError, CoreResult, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalFamily {
    Hexagonal,
    Square,
    Rectangular,
}

impl CrystalFamily {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hexagonal => "hexagonal",
            Self::Square => "square",
            Self::Rectangular => "rectangular",
        }
    }

    /// Reference lattice constant in Angstrom for each family.
    pub const fn default_a0(self) -> f64 {
        match self {
            Self::Hexagonal => 3.32,
            Self::Square | Self::Rectangular => 3.0,
        }
    }

    /// Reference second constant; only the rectangular family uses one.
    pub const fn default_b0(self) -> Option<f64> {
        match self {
            Self::Rectangular => Some(2.0),
            _ => None,
        }
    }
}

impl Display for CrystalFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for CrystalFamily {
    type Err = CoreError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "hexagonal" | "hex" => Ok(Self::Hexagonal),
            "square" => Ok(Self::Square),
            "rectangular" | "rect" => Ok(Self::Rectangular),
            other => Err(CoreError::input_validation(
                "INPUT.CRYSTAL_FAMILY",
                format!("unrecognized crystal family '{other}'"),
            )),
        }
    }
}

/// A named high-symmetry point of the Brillouin zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KPoint {
    pub label: &'static str,
    pub position: Vec2,
}

/// Reciprocal lattice vectors and the high-symmetry k-points of one family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatticeGeometry {
    pub family: CrystalFamily,
    pub b1: Vec2,
    pub b2: Vec2,
    pub k_points: Vec<KPoint>,
}

impl LatticeGeometry {
    pub fn k_point(&self, label: &str) -> Option<Vec2> {
        self.k_points
            .iter()
            .find(|point| point.label == label)
            .map(|point| point.position)
    }

    /// Start-point policy shared with the trajectory mapper: keep the current
    /// label if this geometry has it, otherwise fall back to the first
    /// available label, otherwise Gamma.
    pub fn fallback_start_label(&self, current: &str) -> &'static str {
        self.k_points
            .iter()
            .find(|point| point.label == current)
            .or_else(|| self.k_points.first())
            .map(|point| point.label)
            .unwrap_or("Gamma")
    }
}

/// Builds the reciprocal geometry for a family and its lattice constant(s).
///
/// The rectangular family needs both constants; every other family ignores
/// `b0`.
pub fn build_lattice(family: CrystalFamily, a0: f64, b0: Option<f64>) -> CoreResult<LatticeGeometry> {
    match family {
        CrystalFamily::Hexagonal => Ok(LatticeGeometry {
            family,
            b1: Vec2::new(PI2 / a0, PI2 / (a0 * 3.0_f64.sqrt())),
            b2: Vec2::new(-PI2 / a0, PI2 / (a0 * 3.0_f64.sqrt())),
            k_points: vec![
                KPoint {
                    label: "Gamma",
                    position: Vec2::ZERO,
                },
                KPoint {
                    label: "K",
                    position: Vec2::new(4.0 * PI / (3.0 * a0), 0.0),
                },
                KPoint {
                    label: "Kp",
                    position: Vec2::new(-4.0 * PI / (3.0 * a0), 0.0),
                },
                KPoint {
                    label: "M",
                    position: Vec2::new(PI / a0, -PI / (a0 * 3.0_f64.sqrt())),
                },
            ],
        }),
        CrystalFamily::Square => Ok(LatticeGeometry {
            family,
            b1: Vec2::new(PI2 / a0, 0.0),
            b2: Vec2::new(0.0, PI2 / a0),
            k_points: vec![
                KPoint {
                    label: "Gamma",
                    position: Vec2::ZERO,
                },
                KPoint {
                    label: "X",
                    position: Vec2::new(PI / a0, 0.0),
                },
                KPoint {
                    label: "Y",
                    position: Vec2::new(0.0, PI / a0),
                },
                KPoint {
                    label: "M",
                    position: Vec2::new(PI / a0, PI / a0),
                },
            ],
        }),
        CrystalFamily::Rectangular => {
            let b0 = b0.ok_or_else(|| {
                CoreError::input_validation(
                    "INPUT.LATTICE_CONSTANT",
                    "rectangular lattice requires both a0 and b0",
                )
            })?;
            Ok(LatticeGeometry {
                family,
                b1: Vec2::new(PI2 / a0, 0.0),
                b2: Vec2::new(0.0, PI2 / b0),
                k_points: vec![
                    KPoint {
                        label: "Gamma",
                        position: Vec2::ZERO,
                    },
                    KPoint {
                        label: "X",
                        position: Vec2::new(PI / a0, 0.0),
                    },
                    KPoint {
                        label: "Y",
                        position: Vec2::new(0.0, PI / b0),
                    },
                    KPoint {
                        label: "S",
                        position: Vec2::new(PI / a0, PI / b0),
                    },
                ],
            })
        }
    }
}
