use super::CliError;
use anyhow::Context;
use pulselab_core::{CoreError, PulseParameters};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub(super) fn load_pulse_parameters(path: &Path) -> Result<PulseParameters, CliError> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter snapshot '{}'", path.display()))?;
    let params: PulseParameters = serde_json::from_str(&text).map_err(|source| {
        CliError::Compute(CoreError::input_validation(
            "INPUT.PULSE_PARAMS",
            format!("invalid parameter snapshot '{}': {}", path.display(), source),
        ))
    })?;
    Ok(params)
}

pub(super) fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory '{}'", parent.display())
            })?;
        }
    }
    let mut text =
        serde_json::to_string_pretty(value).context("failed to serialize JSON artifact")?;
    text.push('\n');
    fs::write(path, text)
        .with_context(|| format!("failed to write artifact '{}'", path.display()))?;
    Ok(())
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize JSON output")?;
    println!("{text}");
    Ok(())
}

/// Fixed-width-friendly scalar rendering: plain decimal in the human range,
/// scientific outside it.
pub(super) fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }
    if value.abs() >= 1.0e6 || value.abs() < 1.0e-4 {
        format!("{value:.6e}")
    } else {
        format!("{value:.6}")
    }
}
