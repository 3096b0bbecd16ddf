//! Arm summary output
//!
//! Writes `label<TAB>count` lines in the order summaries were produced, and
//! reads the same format back.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use thiserror::Error;

use crate::types::{ArmSummary, Locus, LocusError, PairCount};

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid summary line: expected 2 fields, got {0}")]
    FieldCount(usize),
    #[error("Invalid arm label: {0}")]
    Label(#[from] LocusError),
    #[error("Invalid pair count: {0:?}")]
    Count(String),
}

/// Write summaries to any sink, one line each.
pub fn write_summaries<W: Write>(writer: &mut W, summaries: &[ArmSummary]) -> std::io::Result<()> {
    for summary in summaries {
        writeln!(writer, "{}\t{}", summary.locus, summary.pair_count)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write summaries into it.
pub fn write_summary_file<P: AsRef<Path>>(path: P, summaries: &[ArmSummary]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_summaries(&mut writer, summaries)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    writer.flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

    Ok(())
}

pub fn parse_summary_line(line: &str) -> Result<ArmSummary, SummaryError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 2 {
        return Err(SummaryError::FieldCount(fields.len()));
    }

    let locus: Locus = fields[0].parse()?;
    let pair_count = fields[1].trim().parse::<PairCount>()
        .map_err(|_| SummaryError::Count(fields[1].to_string()))?;

    Ok(ArmSummary::new(locus, pair_count))
}

pub fn read_summaries<R: BufRead>(reader: R) -> Result<Vec<ArmSummary>> {
    let mut summaries = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_summary_line(line.trim_end_matches('\r')) {
            Ok(summary) => summaries.push(summary),
            Err(e) => return Err(anyhow!("Error parsing line {}: {}", line_num + 1, e)),
        }
    }

    Ok(summaries)
}

pub fn read_summary_file<P: AsRef<Path>>(path: P) -> Result<Vec<ArmSummary>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open summary file: {}", path.display()))?;
    read_summaries(BufReader::new(file))
}
