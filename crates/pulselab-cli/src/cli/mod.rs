mod commands;
mod helpers;

use clap::Parser;
use pulselab_core::CoreError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let core_error = error.as_core_error();
            eprintln!("{}", core_error.diagnostic_line());
            core_error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "pulselab", about = "Laser-pulse calculation engine")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Convert a photon energy between the six supported units
    Convert(commands::ConvertArgs),
    /// Classify a wavelength into its electromagnetic band
    Spectrum(commands::SpectrumArgs),
    /// Print the reciprocal geometry of a 2D crystal family
    Lattice(commands::LatticeArgs),
    /// Synthesize a two-color pulse and report its diagnostics
    Pulse(commands::PulseArgs),
    /// Map a synthesized pulse into the Brillouin zone
    Trajectory(commands::TrajectoryArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Convert(args) => commands::run_convert_command(args),
        CliCommand::Spectrum(args) => commands::run_spectrum_command(args),
        CliCommand::Lattice(args) => commands::run_lattice_command(args),
        CliCommand::Pulse(args) => commands::run_pulse_command(args),
        CliCommand::Trajectory(args) => commands::run_trajectory_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(CoreError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_core_error(&self) -> CoreError {
        match self {
            Self::Usage(message) => CoreError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => {
                CoreError::computation("COMPUTATION.CLI_IO", format!("{error:#}"))
            }
        }
    }
}
