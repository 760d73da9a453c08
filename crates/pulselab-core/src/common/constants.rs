//! Physical constants and unit factors shared across the calculation modules.
//!
//! These values are the single source for every conversion factor so that no
//! module carries ad hoc literal constants.

pub const PI: f64 = std::f64::consts::PI;
pub const PI2: f64 = 2.0 * PI;

/// Speed of light in m/s (exact, SI definition).
pub const CSOL: f64 = 299_792_458.0;

/// One Hartree in eV (CODATA 2018).
pub const HARTREE_EV: f64 = 27.211_386_245_988_f64;

/// Planck relation factor: photon energy in eV per THz of frequency.
pub const EV_PER_THZ: f64 = 4.135_667_696e-3;

/// Period/frequency reciprocal scale: fs times THz.
pub const FS_THZ: f64 = 1_000.0;

/// Carrier-frequency entry factor: omega in rad/fs per eV of photon energy.
pub const FS_TO_EV: f64 = 1.519;

/// Inverse fine-structure constant as used by the Peierls substitution.
pub const ALPINV_PEIERLS: f64 = 137.036;

/// Inverse fine-structure constant (signed) used by the fluence field stencil.
pub const ALPINV_FIELD: f64 = -137.035_999_074;

/// Atomic-unit fluence to mJ/cm^2.
pub const FLUENCE_MJ_PER_CM2: f64 = 848.896_503_02;
