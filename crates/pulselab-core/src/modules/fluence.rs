//! Pulse fluence from the synthesized vector-potential series.
//!
//! The integral recomputes its own central-difference field from `Ax,Ay`
//! instead of reusing the synthesizer's backward-difference `Ex,Ey`; the two
//! stencils use different scaling constants and are kept independent on
//! purpose, matching the established numerics.

use crate::common::constants::{ALPINV_FIELD, FLUENCE_MJ_PER_CM2};
use crate::modules::pulse::PulseSample;

/// Time-integrated field energy density in mJ/cm^2.
///
/// Sums `(Ex^2 + Ey^2) * dt / 2` over interior samples with a centered
/// stencil; fewer than 3 samples leave no interior points and yield zero.
pub fn fluence(samples: &[PulseSample]) -> f64 {
    if samples.len() < 3 {
        return 0.0;
    }

    let mut energy_sum = 0.0;
    for window in samples.windows(3) {
        let dt = window[2].t - window[0].t;
        let ex = (window[2].ax - window[0].ax) / (ALPINV_FIELD * dt);
        let ey = (window[2].ay - window[0].ay) / (ALPINV_FIELD * dt);
        energy_sum += (ex * ex + ey * ey) * dt / 2.0;
    }

    energy_sum * FLUENCE_MJ_PER_CM2
}
