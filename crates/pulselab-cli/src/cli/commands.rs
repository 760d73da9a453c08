use super::CliError;
use super::helpers::*;
use pulselab_core::{
    BAND_TABLE, CrystalFamily, ENERGY_UNITS, EnergyUnit, PulseParameters, build_lattice,
    classify_wavelength, convert, diagnostics, fluence, map_trajectory, max_amplitude,
    omega_from_ev, phase_from_pi, synthesize,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(clap::Args)]
pub(super) struct ConvertArgs {
    /// Numeric value to convert
    value: f64,

    /// Source unit label: a.u., eV, nm, cm-1, THz, fs
    unit: String,

    /// Emit the converted quantity as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub(super) fn run_convert_command(args: ConvertArgs) -> Result<i32, CliError> {
    let unit = EnergyUnit::from_str(&args.unit)?;
    let quantity = convert(args.value, unit);
    tracing::debug!(value = args.value, unit = unit.as_str(), "converted photon energy");

    if args.json {
        print_json(&quantity)?;
    } else {
        for target in ENERGY_UNITS {
            println!("{:>16} {}", format_value(quantity.value_in(target)), target);
        }
        if let Some(band) = classify_wavelength(quantity.nanometers) {
            println!("{:>16} {}", "band", band);
        }
    }
    Ok(0)
}

#[derive(clap::Args)]
pub(super) struct SpectrumArgs {
    /// Wavelength in nm
    wavelength: f64,

    /// Emit the classification as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub(super) fn run_spectrum_command(args: SpectrumArgs) -> Result<i32, CliError> {
    let band = classify_wavelength(args.wavelength);

    if args.json {
        print_json(&serde_json::json!({
            "wavelengthNm": args.wavelength,
            "band": band.map(|band| band.as_str()),
        }))?;
        return Ok(0);
    }

    for range in BAND_TABLE {
        let marker = if range.contains(args.wavelength) {
            ">"
        } else {
            " "
        };
        match range.max_nm {
            Some(max) => println!(
                "{marker} {:<12} {} - {} nm",
                range.band,
                format_value(range.min_nm),
                format_value(max)
            ),
            None => println!(
                "{marker} {:<12} above {} nm",
                range.band,
                format_value(range.min_nm)
            ),
        }
    }
    match band {
        Some(band) => println!("{} nm is {}", format_value(args.wavelength), band),
        None => println!("{} nm has no band", format_value(args.wavelength)),
    }
    Ok(0)
}

#[derive(clap::Args)]
pub(super) struct LatticeArgs {
    /// Crystal family: hexagonal, square, rectangular
    family: String,

    /// Lattice constant a0 in Angstrom; defaults per family
    #[arg(long)]
    a0: Option<f64>,

    /// Second lattice constant b0 in Angstrom (rectangular only)
    #[arg(long)]
    b0: Option<f64>,

    /// Emit the geometry as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub(super) fn run_lattice_command(args: LatticeArgs) -> Result<i32, CliError> {
    let family = CrystalFamily::from_str(&args.family)?;
    let a0 = args.a0.unwrap_or_else(|| family.default_a0());
    let b0 = args.b0.or_else(|| family.default_b0());
    let geometry = build_lattice(family, a0, b0)?;

    if args.json {
        print_json(&geometry)?;
        return Ok(0);
    }

    println!("{} lattice, a0 = {}", family, format_value(a0));
    println!(
        "b1 = ({}, {})",
        format_value(geometry.b1.x),
        format_value(geometry.b1.y)
    );
    println!(
        "b2 = ({}, {})",
        format_value(geometry.b2.x),
        format_value(geometry.b2.y)
    );
    for point in &geometry.k_points {
        println!(
            "{:<6} ({}, {})",
            point.label,
            format_value(point.position.x),
            format_value(point.position.y)
        );
    }
    Ok(0)
}

/// Per-scalar overrides layered on top of the snapshot or the defaults.
/// Carrier energies enter in eV and phases in units of pi, matching the
/// parameter-form conventions.
#[derive(clap::Args, Default)]
pub(super) struct PulseOverrides {
    /// Sampling step in fs
    #[arg(long)]
    delta_t: Option<f64>,

    /// Window start in fs
    #[arg(long)]
    t_start: Option<f64>,

    /// Window end in fs
    #[arg(long)]
    t_end: Option<f64>,

    /// Envelope center in fs
    #[arg(long)]
    t0: Option<f64>,

    /// Pulse 1 amplitude along x
    #[arg(long)]
    a1x: Option<f64>,

    /// Pulse 1 amplitude along y
    #[arg(long)]
    a1y: Option<f64>,

    /// Pulse 1 photon energy in eV
    #[arg(long)]
    omega1_ev: Option<f64>,

    /// Pulse 1 envelope width in fs
    #[arg(long)]
    sigma1: Option<f64>,

    /// Pulse 1 x phase in units of pi
    #[arg(long)]
    phi1x_pi: Option<f64>,

    /// Pulse 1 y phase in units of pi
    #[arg(long)]
    phi1y_pi: Option<f64>,

    /// Pulse 2 amplitude along x
    #[arg(long)]
    a2x: Option<f64>,

    /// Pulse 2 amplitude along y
    #[arg(long)]
    a2y: Option<f64>,

    /// Pulse 2 photon energy in eV
    #[arg(long)]
    omega2_ev: Option<f64>,

    /// Pulse 2 envelope width in fs
    #[arg(long)]
    sigma2: Option<f64>,

    /// Pulse 2 x phase in units of pi
    #[arg(long)]
    phi2x_pi: Option<f64>,

    /// Pulse 2 y phase in units of pi
    #[arg(long)]
    phi2y_pi: Option<f64>,
}

impl PulseOverrides {
    fn apply(&self, mut p: PulseParameters) -> PulseParameters {
        if let Some(v) = self.delta_t {
            p.delta_t = v;
        }
        if let Some(v) = self.t_start {
            p.t_start = v;
        }
        if let Some(v) = self.t_end {
            p.t_end = v;
        }
        if let Some(v) = self.t0 {
            p.t0 = v;
        }
        if let Some(v) = self.a1x {
            p.a1x = v;
        }
        if let Some(v) = self.a1y {
            p.a1y = v;
        }
        if let Some(v) = self.omega1_ev {
            p.omega1 = omega_from_ev(v);
        }
        if let Some(v) = self.sigma1 {
            p.sigma1 = v;
        }
        if let Some(v) = self.phi1x_pi {
            p.phi1x = phase_from_pi(v);
        }
        if let Some(v) = self.phi1y_pi {
            p.phi1y = phase_from_pi(v);
        }
        if let Some(v) = self.a2x {
            p.a2x = v;
        }
        if let Some(v) = self.a2y {
            p.a2y = v;
        }
        if let Some(v) = self.omega2_ev {
            p.omega2 = omega_from_ev(v);
        }
        if let Some(v) = self.sigma2 {
            p.sigma2 = v;
        }
        if let Some(v) = self.phi2x_pi {
            p.phi2x = phase_from_pi(v);
        }
        if let Some(v) = self.phi2y_pi {
            p.phi2y = phase_from_pi(v);
        }
        p
    }
}

#[derive(clap::Args)]
pub(super) struct PulseArgs {
    /// JSON parameter snapshot; omitted fields take the reference defaults
    #[arg(long)]
    params: Option<PathBuf>,

    #[command(flatten)]
    overrides: PulseOverrides,

    /// Write the full sample sequence as a JSON artifact
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit diagnostics as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn resolve_parameters(
    params: Option<&PathBuf>,
    overrides: &PulseOverrides,
) -> Result<PulseParameters, CliError> {
    let base = match params {
        Some(path) => load_pulse_parameters(path)?,
        None => PulseParameters::default(),
    };
    Ok(overrides.apply(base))
}

pub(super) fn run_pulse_command(args: PulseArgs) -> Result<i32, CliError> {
    let p = resolve_parameters(args.params.as_ref(), &args.overrides)?;
    let samples = synthesize(&p)?;
    let pulse_fluence = fluence(&samples);
    let max = max_amplitude(&samples);
    let diag = diagnostics(&p);
    tracing::debug!(samples = samples.len(), fluence = pulse_fluence, "synthesized pulse");

    if let Some(output) = &args.output {
        write_json_file(output, &samples)?;
    }

    if args.json {
        print_json(&serde_json::json!({
            "sampleCount": samples.len(),
            "maxAmplitude": max,
            "fluenceMjPerCm2": pulse_fluence,
            "diagnostics": diag,
        }))?;
        return Ok(0);
    }

    println!("samples      {}", samples.len());
    println!("max |A|      {}", format_value(max));
    println!("fluence      {} mJ/cm^2", format_value(pulse_fluence));
    for (name, sub) in [("pulse 1", diag.pulse1), ("pulse 2", diag.pulse2)] {
        println!(
            "{name}      fwhm {} fs, period {} fs, cycles {} in fwhm / {} full",
            format_value(sub.fwhm),
            format_value(sub.period),
            format_value(sub.main_cycle_count),
            format_value(sub.full_cycle_count)
        );
    }
    if let Some(output) = &args.output {
        println!("wrote {}", output.display());
    }
    Ok(0)
}

#[derive(clap::Args)]
pub(super) struct TrajectoryArgs {
    /// Crystal family: hexagonal, square, rectangular
    #[arg(long, default_value = "hexagonal")]
    family: String,

    /// Lattice constant a0 in Angstrom; defaults per family
    #[arg(long)]
    a0: Option<f64>,

    /// Second lattice constant b0 in Angstrom (rectangular only)
    #[arg(long)]
    b0: Option<f64>,

    /// Start k-point label
    #[arg(long, default_value = "Gamma")]
    start: String,

    /// JSON parameter snapshot; omitted fields take the reference defaults
    #[arg(long)]
    params: Option<PathBuf>,

    #[command(flatten)]
    overrides: PulseOverrides,

    /// Write the trajectory as a JSON artifact
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit the trajectory as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub(super) fn run_trajectory_command(args: TrajectoryArgs) -> Result<i32, CliError> {
    let family = CrystalFamily::from_str(&args.family)?;
    let a0 = args.a0.unwrap_or_else(|| family.default_a0());
    let b0 = args.b0.or_else(|| family.default_b0());
    let geometry = build_lattice(family, a0, b0)?;

    let p = resolve_parameters(args.params.as_ref(), &args.overrides)?;
    let samples = synthesize(&p)?;
    let trajectory = map_trajectory(&samples, Some(&geometry), &args.start);
    let start_label = geometry.fallback_start_label(&args.start);
    tracing::debug!(
        points = trajectory.len(),
        start = start_label,
        family = family.as_str(),
        "mapped trajectory"
    );

    if let Some(output) = &args.output {
        write_json_file(output, &trajectory)?;
    }

    if args.json {
        print_json(&trajectory)?;
        return Ok(0);
    }

    println!("{} lattice, start {}", family, start_label);
    println!("points       {}", trajectory.len());
    if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
        println!(
            "k(first)     ({}, {})",
            format_value(first.kx),
            format_value(first.ky)
        );
        println!(
            "k(last)      ({}, {})",
            format_value(last.kx),
            format_value(last.ky)
        );
    }
    if let Some(output) = &args.output {
        println!("wrote {}", output.display());
    }
    Ok(0)
}
