//! Electromagnetic-spectrum band classification for the converter display.
//!
//! Bands are lower-inclusive in wavelength (`min <= lambda < max`), so the
//! 700 nm boundary belongs to the infrared band and the top band is unbounded
//! above. A non-positive or non-finite wavelength classifies as no band.

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpectralBand {
    Gamma,
    XRay,
    Ultraviolet,
    Visible,
    Infrared,
    Microwave,
    Radio,
}

impl SpectralBand {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gamma => "Gamma",
            Self::XRay => "X-rays",
            Self::Ultraviolet => "Ultraviolet",
            Self::Visible => "Visible",
            Self::Infrared => "Infrared",
            Self::Microwave => "Microwave",
            Self::Radio => "Radio",
        }
    }
}

impl Display for SpectralBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One row of the spectrum table. `max_nm` is `None` for the unbounded top
/// band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandRange {
    pub band: SpectralBand,
    pub min_nm: f64,
    pub max_nm: Option<f64>,
}

/// Wavelength ranges in nm, longest first, matching the display table order.
pub const BAND_TABLE: [BandRange; 7] = [
    BandRange {
        band: SpectralBand::Radio,
        min_nm: 1.0e7,
        max_nm: None,
    },
    BandRange {
        band: SpectralBand::Microwave,
        min_nm: 1.0e4,
        max_nm: Some(1.0e7),
    },
    BandRange {
        band: SpectralBand::Infrared,
        min_nm: 700.0,
        max_nm: Some(1.0e4),
    },
    BandRange {
        band: SpectralBand::Visible,
        min_nm: 380.0,
        max_nm: Some(700.0),
    },
    BandRange {
        band: SpectralBand::Ultraviolet,
        min_nm: 10.0,
        max_nm: Some(380.0),
    },
    BandRange {
        band: SpectralBand::XRay,
        min_nm: 0.01,
        max_nm: Some(10.0),
    },
    BandRange {
        band: SpectralBand::Gamma,
        min_nm: 0.0,
        max_nm: Some(0.01),
    },
];

impl BandRange {
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
            return false;
        }
        let above_min = wavelength_nm >= self.min_nm;
        match self.max_nm {
            Some(max) => above_min && wavelength_nm < max,
            None => above_min,
        }
    }
}

pub fn classify_wavelength(wavelength_nm: f64) -> Option<SpectralBand> {
    BAND_TABLE
        .iter()
        .find(|range| range.contains(wavelength_nm))
        .map(|range| range.band)
}
