//! End-to-end chain over the pulse modules: synthesize a two-color pulse,
//! integrate its fluence, and map it into a Brillouin zone.

use pulselab_core::{
    CrystalFamily, PulseParameters, build_lattice, diagnostics, fluence, map_trajectory,
    max_amplitude, omega_from_ev, phase_from_pi, synthesize,
};

#[test]
fn reference_configuration_produces_a_full_window_of_samples() {
    let p = PulseParameters::default();
    let samples = synthesize(&p).expect("synthesis");

    // 10 fs to 30 fs at 0.1 fs steps; float accumulation may drop the final
    // sample when the running time overshoots the end bound.
    assert!((200..=201).contains(&samples.len()), "len={}", samples.len());
    let last = samples.last().expect("last sample");
    assert!(last.t <= p.t_end && last.t > p.t_end - 2.0 * p.delta_t);

    for sample in &samples {
        assert!(sample.ax.is_finite());
        assert!(sample.ay.is_finite());
        assert!(sample.ex.is_finite());
        assert!(sample.ey.is_finite());
    }
}

#[test]
fn stronger_pulses_carry_more_fluence() {
    let weak = PulseParameters::default();
    let strong = PulseParameters {
        a1x: 2.0 * weak.a1x,
        ..weak
    };

    let weak_fluence = fluence(&synthesize(&weak).expect("weak synthesis"));
    let strong_fluence = fluence(&synthesize(&strong).expect("strong synthesis"));
    assert!(weak_fluence > 0.0);
    assert!(strong_fluence > weak_fluence);
}

#[test]
fn trajectory_excursion_scales_with_the_vector_potential() {
    let p = PulseParameters::default();
    let samples = synthesize(&p).expect("synthesis");
    let lattice = build_lattice(CrystalFamily::Hexagonal, 3.32, None).expect("geometry");
    let start = lattice.k_point("K").expect("K point");

    let trajectory = map_trajectory(&samples, Some(&lattice), "K");
    assert_eq!(trajectory.len(), samples.len());

    let max_excursion = trajectory
        .iter()
        .map(|point| ((point.kx - start.x).powi(2) + (point.ky - start.y).powi(2)).sqrt())
        .fold(0.0, f64::max);
    assert!(max_excursion > 0.0);

    // Doubling every amplitude doubles the k-space excursion.
    let doubled = PulseParameters {
        a1x: 2.0 * p.a1x,
        a1y: 2.0 * p.a1y,
        a2x: 2.0 * p.a2x,
        a2y: 2.0 * p.a2y,
        ..p
    };
    let doubled_samples = synthesize(&doubled).expect("synthesis");
    let doubled_trajectory = map_trajectory(&doubled_samples, Some(&lattice), "K");
    let doubled_excursion = doubled_trajectory
        .iter()
        .map(|point| ((point.kx - start.x).powi(2) + (point.ky - start.y).powi(2)).sqrt())
        .fold(0.0, f64::max);
    assert!((doubled_excursion - 2.0 * max_excursion).abs() <= 1.0e-9 * max_excursion.max(1.0));
}

#[test]
fn diagnostics_track_the_entry_conventions() {
    let p = PulseParameters {
        omega1: omega_from_ev(0.4),
        phi1x: phase_from_pi(-0.5),
        ..PulseParameters::default()
    };
    let diag = diagnostics(&p);
    assert!(diag.pulse1.period > diag.pulse2.period);
    assert!(diag.pulse1.fwhm < diag.pulse2.fwhm);
}

#[test]
fn amplitude_scan_bounds_the_reference_pulse() {
    let p = PulseParameters::default();
    let samples = synthesize(&p).expect("synthesis");
    let max = max_amplitude(&samples);
    // The x amplitude of the strong pulse bounds the combined potential.
    assert!(max <= p.a1x + p.a2x);
    assert!(max > 0.5 * p.a1x);
}
