//! Semiclassical k-space trajectory via the Peierls substitution.
//!
//! Each pulse sample maps independently: the vector potential scaled by the
//! inverse fine-structure constant gives fractional reciprocal coordinates,
//! which mix through `b1,b2` into a Cartesian displacement from the chosen
//! start k-point. The mapping is stateless and per-sample.

use crate::common::constants::ALPINV_PEIERLS;
use crate::domain::Vec2;
use crate::modules::lattice::LatticeGeometry;
use crate::modules::pulse::PulseSample;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub kx: f64,
    pub ky: f64,
    #[serde(rename = "Ax")]
    pub ax: f64,
    #[serde(rename = "Ay")]
    pub ay: f64,
}

/// Maps a pulse sequence into the Brillouin zone of `lattice`.
///
/// A geometry that has not been built yet (`None`) yields an empty sequence,
/// never a fault. A start label the geometry lacks resolves through the
/// shared fallback policy (first available point, then Gamma).
pub fn map_trajectory(
    samples: &[PulseSample],
    lattice: Option<&LatticeGeometry>,
    start_label: &str,
) -> Vec<TrajectorySample> {
    let Some(lattice) = lattice else {
        return Vec::new();
    };

    let start = lattice
        .k_point(lattice.fallback_start_label(start_label))
        .unwrap_or(Vec2::ZERO);

    samples
        .iter()
        .map(|sample| {
            let dkx = sample.ax / ALPINV_PEIERLS;
            let dky = sample.ay / ALPINV_PEIERLS;
            TrajectorySample {
                t: sample.t,
                kx: start.x + dkx * lattice.b1.x + dky * lattice.b2.x,
                ky: start.y + dkx * lattice.b1.y + dky * lattice.b2.y,
                ax: sample.ax,
                ay: sample.ay,
            }
        })
        .collect()
}
