//! Count command implementation - per-arm close pair counts for one record file

use anyhow::{Result, Context};
use std::path::{Path, PathBuf};

use armprox_core::io::RecordError;
use armprox_core::{load_sequence, write_summary_file, ProximityCounter};

use crate::config::Config;
use crate::error::CliError;

pub fn execute(
    config: &Config,
    input: PathBuf,
    k: f64,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    log::info!("Counting close pairs per chromosome arm");
    log::info!("Input file: {}", input.display());
    log::info!("Distance threshold: {}", k);

    if !input.exists() {
        return Err(CliError::file_not_found(input).into());
    }

    let counter = ProximityCounter::new(k).map_err(|e| CliError::argument(e.to_string()))?;

    let output = match output {
        Some(path) => path,
        None => config.output_path_for(&input)?,
    };

    let sequence = load_sequence(&input).map_err(|e| load_error(&input, e))?;
    log::info!("Loaded {} records", sequence.len());

    let summaries = counter.count(&sequence);
    log::info!("Computed {} arm summaries", summaries.len());

    ensure_parent_dir(&output)?;
    write_summary_file(&output, &summaries)
        .with_context(|| format!("Failed to write summaries to {}", output.display()))?;

    log::info!("Output written to: {}", output.display());
    Ok(output)
}

/// Read failures are IO errors; only malformed rows are parse errors.
fn load_error(input: &Path, err: anyhow::Error) -> CliError {
    let is_io = err.chain().any(|cause| {
        cause.is::<std::io::Error>()
            || matches!(cause.downcast_ref::<RecordError>(), Some(RecordError::Io(_)))
    });

    if is_io {
        CliError::io(format!("Failed to read {}: {:#}", input.display(), err))
    } else {
        CliError::parse(input.display().to_string(), format!("{:#}", err))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("Creating output directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::io(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
    }
    Ok(())
}
