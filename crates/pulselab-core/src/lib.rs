//! Numerical core for interactive laser-pulse calculations: photon-energy
//! unit conversion, two-color pulse synthesis with fluence and cycle
//! diagnostics, and semiclassical k-space trajectories in 2D Brillouin
//! zones.
//!
//! Every public entry point is a pure function over caller-owned value
//! snapshots; the crate holds no state between calls.

pub mod common;
pub mod domain;
pub mod modules;

pub use domain::{CoreError, CoreErrorCategory, CoreResult, Vec2};
pub use modules::convert::{ENERGY_UNITS, EnergyQuantity, EnergyUnit, convert, convert_labeled};
pub use modules::fluence::fluence;
pub use modules::lattice::{CrystalFamily, KPoint, LatticeGeometry, build_lattice};
pub use modules::pulse::{
    PulseDiagnostics, PulseParameters, PulseSample, SubPulseDiagnostics, diagnostics,
    max_amplitude, omega_from_ev, phase_from_pi, synthesize,
};
pub use modules::spectrum::{BAND_TABLE, BandRange, SpectralBand, classify_wavelength};
pub use modules::trajectory::{TrajectorySample, map_trajectory};
