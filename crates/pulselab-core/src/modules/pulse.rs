//! Two-color Gaussian-envelope pulse synthesis.
//!
//! `synthesize` is a pure function of a [`PulseParameters`] snapshot: the
//! caller owns the snapshot and every call materializes a fresh sample
//! sequence, so replaying an animation or recomputing on a parameter edit
//! never shares state. Each sub-pulse is an envelope-modulated carrier
//!
//! ```text
//! A_k(t) = A0_k * exp(-(t - t0)^2 / (2 sigma_k^2)) * sin(omega_k (t - t0) + phi_k)
//! ```
//!
//! and the electric field is the backward finite difference `-dA/dt`
//! evaluated analytically at `t - delta_t`, which keeps the first sample
//! well-defined without a predecessor in the sequence.

use crate::common::constants::{FS_TO_EV, PI, PI2};
use crate::domain::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Full snapshot of the sixteen pulse scalars.
///
/// `omega` values are angular frequencies in rad/fs and `phi` values are in
/// radians; use [`omega_from_ev`] and [`phase_from_pi`] to apply the entry
/// conventions of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseParameters {
    pub delta_t: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub t0: f64,
    #[serde(rename = "A1x")]
    pub a1x: f64,
    #[serde(rename = "A1y")]
    pub a1y: f64,
    pub omega1: f64,
    pub sigma1: f64,
    pub phi1x: f64,
    pub phi1y: f64,
    #[serde(rename = "A2x")]
    pub a2x: f64,
    #[serde(rename = "A2y")]
    pub a2y: f64,
    pub omega2: f64,
    pub sigma2: f64,
    pub phi2x: f64,
    pub phi2y: f64,
}

impl Default for PulseParameters {
    /// Reference two-color configuration: a strong 0.4 eV pulse polarized
    /// along x plus a weak diagonal 1.6 eV pulse.
    fn default() -> Self {
        Self {
            delta_t: 0.1,
            t_start: 10.0,
            t_end: 30.0,
            t0: 20.0,
            a1x: 20.0,
            a1y: 0.0,
            omega1: omega_from_ev(0.4),
            sigma1: 2.0,
            phi1x: phase_from_pi(-0.5),
            phi1y: 0.0,
            a2x: 1.0,
            a2y: 1.0,
            omega2: omega_from_ev(1.6),
            sigma2: 3.18,
            phi2x: phase_from_pi(-0.5),
            phi2y: 0.0,
        }
    }
}

/// Carrier frequency entry convention: photon energy in eV to rad/fs.
pub fn omega_from_ev(energy_ev: f64) -> f64 {
    energy_ev * FS_TO_EV
}

/// CEP entry convention: phase in units of pi to radians.
pub fn phase_from_pi(phase_pi: f64) -> f64 {
    phase_pi * PI
}

/// One time sample of the synthesized pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseSample {
    pub t: f64,
    #[serde(rename = "A1x")]
    pub a1x: f64,
    #[serde(rename = "A1y")]
    pub a1y: f64,
    #[serde(rename = "A2x")]
    pub a2x: f64,
    #[serde(rename = "A2y")]
    pub a2y: f64,
    #[serde(rename = "Ax")]
    pub ax: f64,
    #[serde(rename = "Ay")]
    pub ay: f64,
    pub envelope1: f64,
    pub envelope2: f64,
    #[serde(rename = "Ex")]
    pub ex: f64,
    #[serde(rename = "Ey")]
    pub ey: f64,
}

fn gaussian(t: f64, t0: f64, sigma: f64) -> f64 {
    (-(t - t0).powi(2) / (2.0 * sigma * sigma)).exp()
}

fn carrier(t_shift: f64, omega: f64, phi: f64) -> f64 {
    (omega * t_shift + phi).sin()
}

/// Combined vector potential at one instant, split into sub-pulse parts.
fn potential_parts(p: &PulseParameters, t: f64) -> (f64, f64, f64, f64) {
    let t_shift = t - p.t0;
    let g1 = gaussian(t, p.t0, p.sigma1);
    let g2 = gaussian(t, p.t0, p.sigma2);
    (
        p.a1x * g1 * carrier(t_shift, p.omega1, p.phi1x),
        p.a1y * g1 * carrier(t_shift, p.omega1, p.phi1y),
        p.a2x * g2 * carrier(t_shift, p.omega2, p.phi2x),
        p.a2y * g2 * carrier(t_shift, p.omega2, p.phi2y),
    )
}

fn validate_time_grid(p: &PulseParameters) -> CoreResult<()> {
    if !p.delta_t.is_finite() || p.delta_t <= 0.0 {
        return Err(CoreError::input_validation(
            "INPUT.TIME_GRID",
            format!("delta_t must be finite and positive, got {}", p.delta_t),
        ));
    }
    if !p.t_start.is_finite() || !p.t_end.is_finite() {
        return Err(CoreError::input_validation(
            "INPUT.TIME_GRID",
            format!(
                "time bounds must be finite, got t_start={} t_end={}",
                p.t_start, p.t_end
            ),
        ));
    }
    Ok(())
}

/// Materializes the sample sequence from `t_start` to `t_end` inclusive.
///
/// The time axis accumulates `delta_t` in floating point exactly like the
/// reference plot loop, so the final sample may fall short of `t_end` by up
/// to one step when the range is not an exact multiple.
pub fn synthesize(p: &PulseParameters) -> CoreResult<Vec<PulseSample>> {
    validate_time_grid(p)?;

    let capacity = ((p.t_end - p.t_start) / p.delta_t).max(0.0) as usize + 1;
    let mut samples = Vec::with_capacity(capacity);

    let mut t = p.t_start;
    while t <= p.t_end {
        let (a1x, a1y, a2x, a2y) = potential_parts(p, t);
        let ax = a1x + a2x;
        let ay = a1y + a2y;

        let (p1x, p1y, p2x, p2y) = potential_parts(p, t - p.delta_t);
        let ax_prev = p1x + p2x;
        let ay_prev = p1y + p2y;

        samples.push(PulseSample {
            t,
            a1x,
            a1y,
            a2x,
            a2y,
            ax,
            ay,
            envelope1: p.a1x * gaussian(t, p.t0, p.sigma1),
            envelope2: p.a2x * gaussian(t, p.t0, p.sigma2),
            ex: -(ax - ax_prev) / p.delta_t,
            ey: -(ay - ay_prev) / p.delta_t,
        });

        t += p.delta_t;
    }

    Ok(samples)
}

/// Largest vector-potential component magnitude over the sequence; the
/// animation canvases scale their axes by this.
pub fn max_amplitude(samples: &[PulseSample]) -> f64 {
    samples
        .iter()
        .map(|sample| sample.ax.abs().max(sample.ay.abs()))
        .fold(0.0, f64::max)
}

/// Derived scalars for one sub-pulse; pure in the parameters, independent of
/// the sampled sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubPulseDiagnostics {
    pub fwhm: f64,
    pub period: f64,
    pub main_cycle_count: f64,
    pub full_cycle_count: f64,
}

impl SubPulseDiagnostics {
    fn for_sub_pulse(sigma: f64, omega: f64) -> Self {
        let half_width = (2.0 * 2.0_f64.ln()).sqrt() * sigma;
        Self {
            fwhm: 2.0 * half_width,
            period: PI2 / omega,
            main_cycle_count: half_width / (PI / omega),
            // 6 sigma covers the 99.73% envelope window.
            full_cycle_count: 6.0 * sigma / (PI2 / omega),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PulseDiagnostics {
    pub pulse1: SubPulseDiagnostics,
    pub pulse2: SubPulseDiagnostics,
}

pub fn diagnostics(p: &PulseParameters) -> PulseDiagnostics {
    PulseDiagnostics {
        pulse1: SubPulseDiagnostics::for_sub_pulse(p.sigma1, p.omega1),
        pulse2: SubPulseDiagnostics::for_sub_pulse(p.sigma2, p.omega2),
    }
}

#[cfg(test)]
mod tests {
    use super::{PulseParameters, diagnostics, max_amplitude, omega_from_ev, synthesize};
    use crate::common::constants::{PI, PI2};

    fn single_pulse() -> PulseParameters {
        PulseParameters {
            delta_t: 0.5,
            t_start: 10.0,
            t_end: 30.0,
            t0: 20.0,
            a1x: 20.0,
            a1y: 0.0,
            omega1: omega_from_ev(0.4),
            sigma1: 2.0,
            phi1x: 0.0,
            phi1y: 0.0,
            a2x: 0.0,
            a2y: 0.0,
            ..PulseParameters::default()
        }
    }

    #[test]
    fn envelope_center_is_exact_for_a_single_pulse() {
        let p = single_pulse();
        let samples = synthesize(&p).expect("synthesis");

        // 0.5 fs steps from 10.0 land on t0 = 20.0 exactly.
        let center = samples
            .iter()
            .find(|sample| sample.t == p.t0)
            .expect("sample at t0");
        assert_eq!(center.ax, 0.0);
        assert_eq!(center.envelope1, p.a1x);
    }

    #[test]
    fn sequence_is_inclusive_of_an_exact_endpoint() {
        let p = PulseParameters {
            delta_t: 0.5,
            t_start: 0.0,
            t_end: 1.0,
            ..PulseParameters::default()
        };
        let samples = synthesize(&p).expect("synthesis");
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.last().expect("last sample").t, 1.0);
    }

    #[test]
    fn sequence_stops_short_when_range_is_not_a_step_multiple() {
        let p = PulseParameters {
            delta_t: 0.3,
            t_start: 0.0,
            t_end: 1.0,
            ..PulseParameters::default()
        };
        let samples = synthesize(&p).expect("synthesis");
        assert_eq!(samples.len(), 4);
        let last = samples.last().expect("last sample").t;
        assert!(last <= 1.0 && last > 1.0 - p.delta_t, "last={last}");
    }

    #[test]
    fn samples_are_strictly_increasing_in_time() {
        let samples = synthesize(&PulseParameters::default()).expect("synthesis");
        assert!(samples.len() > 100);
        for pair in samples.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn synthesis_is_idempotent_for_an_identical_snapshot() {
        let p = PulseParameters::default();
        let first = synthesize(&p).expect("first synthesis");
        let second = synthesize(&p).expect("second synthesis");
        assert_eq!(first, second);
    }

    #[test]
    fn first_sample_field_is_well_defined() {
        let samples = synthesize(&PulseParameters::default()).expect("synthesis");
        let first = samples.first().expect("first sample");
        assert!(first.ex.is_finite());
        assert!(first.ey.is_finite());
    }

    #[test]
    fn field_matches_backward_difference_of_adjacent_samples() {
        let samples = synthesize(&PulseParameters::default()).expect("synthesis");
        let p = PulseParameters::default();
        for pair in samples.windows(2) {
            let expected = -(pair[1].ax - pair[0].ax) / p.delta_t;
            // The stencil evaluates at t - delta_t analytically; adjacent
            // samples differ only by float accumulation of the time axis.
            assert!(
                (pair[1].ex - expected).abs() <= 1.0e-6,
                "t={} ex={} expected={}",
                pair[1].t,
                pair[1].ex,
                expected
            );
        }
    }

    #[test]
    fn degenerate_time_grid_is_rejected() {
        let zero_step = PulseParameters {
            delta_t: 0.0,
            ..PulseParameters::default()
        };
        let error = synthesize(&zero_step).expect_err("zero delta_t should fail");
        assert_eq!(error.placeholder(), "INPUT.TIME_GRID");

        let inverted = PulseParameters {
            t_end: f64::INFINITY,
            ..PulseParameters::default()
        };
        let error = synthesize(&inverted).expect_err("infinite bound should fail");
        assert_eq!(error.placeholder(), "INPUT.TIME_GRID");
    }

    #[test]
    fn empty_range_yields_no_samples() {
        let p = PulseParameters {
            t_start: 5.0,
            t_end: 4.0,
            ..PulseParameters::default()
        };
        assert!(synthesize(&p).expect("synthesis").is_empty());
    }

    #[test]
    fn diagnostics_match_closed_forms() {
        let p = PulseParameters::default();
        let diag = diagnostics(&p);

        let expected_fwhm = 2.0 * (2.0 * 2.0_f64.ln()).sqrt() * p.sigma1;
        assert!((diag.pulse1.fwhm - expected_fwhm).abs() <= 1.0e-12);
        assert!((diag.pulse1.period - PI2 / p.omega1).abs() <= 1.0e-12);
        assert!(
            (diag.pulse1.main_cycle_count
                - (2.0 * 2.0_f64.ln()).sqrt() * p.sigma1 / (PI / p.omega1))
                .abs()
                <= 1.0e-12
        );
        assert!(
            (diag.pulse2.full_cycle_count - 6.0 * p.sigma2 / (PI2 / p.omega2)).abs() <= 1.0e-12
        );
    }

    #[test]
    fn max_amplitude_scans_both_components() {
        let samples = synthesize(&PulseParameters::default()).expect("synthesis");
        let max = max_amplitude(&samples);
        assert!(max > 0.0);
        assert!(
            samples
                .iter()
                .all(|sample| sample.ax.abs() <= max && sample.ay.abs() <= max)
        );
        assert_eq!(max_amplitude(&[]), 0.0);
    }
}
