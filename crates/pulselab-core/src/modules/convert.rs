//! Six-way photon-energy unit converter.
//!
//! Conversions run in two phases: first the input value is resolved to the
//! canonical photon energy in eV, then every other representation is derived
//! from that energy unconditionally. The source field is pinned to the input
//! value afterwards so round-tripping through the same unit is exact.
//! Numerically degenerate inputs (zero wavelength, zero period) propagate
//! non-finite values rather than failing.

use crate::common::constants::{CSOL, EV_PER_THZ, FS_THZ, HARTREE_EV};
use crate::domain::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    AtomicUnits,
    ElectronVolts,
    Nanometers,
    Wavenumbers,
    Terahertz,
    Femtoseconds,
}

pub const ENERGY_UNITS: [EnergyUnit; 6] = [
    EnergyUnit::AtomicUnits,
    EnergyUnit::ElectronVolts,
    EnergyUnit::Nanometers,
    EnergyUnit::Wavenumbers,
    EnergyUnit::Terahertz,
    EnergyUnit::Femtoseconds,
];

impl EnergyUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AtomicUnits => "a.u.",
            Self::ElectronVolts => "eV",
            Self::Nanometers => "nm",
            Self::Wavenumbers => "cm-1",
            Self::Terahertz => "THz",
            Self::Femtoseconds => "fs",
        }
    }

    /// Label lookup for user-typed unit tags. Unknown text is a lookup
    /// failure, not a fault.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "a.u." | "au" => Some(Self::AtomicUnits),
            "eV" | "ev" => Some(Self::ElectronVolts),
            "nm" => Some(Self::Nanometers),
            "cm-1" | "cm^-1" => Some(Self::Wavenumbers),
            "THz" | "thz" => Some(Self::Terahertz),
            "fs" => Some(Self::Femtoseconds),
            _ => None,
        }
    }
}

impl Display for EnergyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyUnit {
    type Err = CoreError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::from_label(label).ok_or_else(|| {
            CoreError::input_validation(
                "INPUT.UNIT_LABEL",
                format!("unrecognized energy unit '{label}'"),
            )
        })
    }
}

/// Six mutually consistent representations of one photon energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyQuantity {
    pub atomic_units: f64,
    pub electron_volts: f64,
    pub terahertz: f64,
    pub wavenumber: f64,
    pub nanometers: f64,
    pub femtoseconds: f64,
}

impl EnergyQuantity {
    /// Derives all six fields from a canonical photon energy in eV.
    pub fn from_electron_volts(hw: f64) -> Self {
        let thz = hw / EV_PER_THZ;
        Self {
            atomic_units: hw / HARTREE_EV,
            electron_volts: hw,
            terahertz: thz,
            wavenumber: thz * 1.0e10 / CSOL,
            nanometers: CSOL * 1.0e-3 / thz,
            femtoseconds: FS_THZ / thz,
        }
    }

    pub fn value_in(&self, unit: EnergyUnit) -> f64 {
        match unit {
            EnergyUnit::AtomicUnits => self.atomic_units,
            EnergyUnit::ElectronVolts => self.electron_volts,
            EnergyUnit::Nanometers => self.nanometers,
            EnergyUnit::Wavenumbers => self.wavenumber,
            EnergyUnit::Terahertz => self.terahertz,
            EnergyUnit::Femtoseconds => self.femtoseconds,
        }
    }

    fn pin(&mut self, unit: EnergyUnit, value: f64) {
        match unit {
            EnergyUnit::AtomicUnits => self.atomic_units = value,
            EnergyUnit::ElectronVolts => self.electron_volts = value,
            EnergyUnit::Nanometers => self.nanometers = value,
            EnergyUnit::Wavenumbers => self.wavenumber = value,
            EnergyUnit::Terahertz => self.terahertz = value,
            EnergyUnit::Femtoseconds => self.femtoseconds = value,
        }
    }
}

/// Converts one `(value, unit)` pair into all six representations.
pub fn convert(value: f64, unit: EnergyUnit) -> EnergyQuantity {
    let hw = match unit {
        EnergyUnit::AtomicUnits => value * HARTREE_EV,
        EnergyUnit::ElectronVolts => value,
        EnergyUnit::Nanometers => EV_PER_THZ * (CSOL * 1.0e-3 / value),
        EnergyUnit::Terahertz => EV_PER_THZ * value,
        EnergyUnit::Wavenumbers => EV_PER_THZ * (value * CSOL / 1.0e10),
        EnergyUnit::Femtoseconds => EV_PER_THZ * (FS_THZ / value),
    };

    let mut quantity = EnergyQuantity::from_electron_volts(hw);
    quantity.pin(unit, value);
    quantity
}

/// Converter entry point for user-typed unit tags.
pub fn convert_labeled(value: f64, label: &str) -> CoreResult<EnergyQuantity> {
    Ok(convert(value, label.parse()?))
}

#[cfg(test)]
mod tests {
    use super::{ENERGY_UNITS, EnergyUnit, convert, convert_labeled};
    use crate::common::constants::HARTREE_EV;

    fn assert_relative_close(label: &str, expected: f64, actual: f64, rel_tol: f64) {
        let rel_diff = (actual - expected).abs() / expected.abs().max(1.0e-300);
        assert!(
            rel_diff <= rel_tol,
            "{label} expected={expected:.12e} actual={actual:.12e} rel_diff={rel_diff:.3e}"
        );
    }

    #[test]
    fn one_ev_matches_reference_values() {
        let quantity = convert(1.0, EnergyUnit::ElectronVolts);
        assert_eq!(quantity.electron_volts, 1.0);
        assert_relative_close("THz", 241.798_9, quantity.terahertz, 1.0e-6);
        assert_relative_close("nm", 1_239.841_98, quantity.nanometers, 1.0e-6);
        assert_relative_close("cm-1", 8_065.543_9, quantity.wavenumber, 1.0e-5);
        assert_relative_close("fs", 4.135_667_7, quantity.femtoseconds, 1.0e-6);
        assert_relative_close("a.u.", 1.0 / HARTREE_EV, quantity.atomic_units, 1.0e-12);
    }

    #[test]
    fn source_field_round_trips_exactly() {
        for unit in ENERGY_UNITS {
            let quantity = convert(2.5, unit);
            assert_eq!(
                quantity.value_in(unit),
                2.5,
                "identity on the source field for {unit}"
            );
        }
    }

    #[test]
    fn cross_feeding_any_field_reproduces_the_quantity() {
        let reference = convert(1.0, EnergyUnit::ElectronVolts);
        for unit in ENERGY_UNITS {
            let refed = convert(reference.value_in(unit), unit);
            for other in ENERGY_UNITS {
                assert_relative_close(
                    other.as_str(),
                    reference.value_in(other),
                    refed.value_in(other),
                    1.0e-6,
                );
            }
        }
    }

    #[test]
    fn wavelength_times_frequency_recovers_c() {
        let quantity = convert(1.0, EnergyUnit::ElectronVolts);
        assert_relative_close(
            "nm*THz",
            299_792.458,
            quantity.nanometers * quantity.terahertz,
            1.0e-9,
        );
    }

    #[test]
    fn degenerate_inputs_propagate_non_finite_values() {
        let quantity = convert(0.0, EnergyUnit::Nanometers);
        assert!(quantity.electron_volts.is_infinite());
        // The source field itself stays pinned to the typed value.
        assert_eq!(quantity.nanometers, 0.0);

        let zero_energy = convert(0.0, EnergyUnit::ElectronVolts);
        assert!(zero_energy.nanometers.is_infinite());
        assert!(zero_energy.femtoseconds.is_infinite());
    }

    #[test]
    fn unknown_unit_label_is_a_lookup_failure() {
        assert!(EnergyUnit::from_label("furlong").is_none());
        let error = convert_labeled(1.0, "furlong").expect_err("unknown label should fail");
        assert_eq!(error.placeholder(), "INPUT.UNIT_LABEL");
    }

    #[test]
    fn label_round_trip_accepts_canonical_tags() {
        for unit in ENERGY_UNITS {
            assert_eq!(EnergyUnit::from_label(unit.as_str()), Some(unit));
        }
    }
}
