//! File I/O for ArmProx
//!
//! Record input is parsed straight into a locus-ordered sequence; summaries are
//! written back out as tab-separated text.

pub mod records;
pub mod summary;

pub use records::{RecordError, RecordIterator, RecordParser};
pub use summary::{read_summary_file, write_summary_file, SummaryError};

use anyhow::Result;
use std::io::BufRead;
use std::path::Path;
use crate::sequence::OrderedRecordSequence;

/// Parse a record file, inserting each record into sorted position as it is read
pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<OrderedRecordSequence> {
    log::debug!("Loading records from {}", path.as_ref().display());
    collect_sorted(RecordParser::iter_file(path)?)
}

/// Same as [`load_sequence`] for an in-memory or already opened source
pub fn load_sequence_from_reader<R: BufRead>(reader: R) -> Result<OrderedRecordSequence> {
    collect_sorted(RecordIterator::new(reader))
}

fn collect_sorted<I: Iterator<Item = Result<crate::types::Record>>>(records: I) -> Result<OrderedRecordSequence> {
    let mut sequence = OrderedRecordSequence::new();
    for record in records {
        sequence.insert_sorted(record?);
    }

    log::debug!("Loaded {} records", sequence.len());
    if log::log_enabled!(log::Level::Trace) {
        for record in &sequence {
            log::trace!("{}", record);
        }
    }

    Ok(sequence)
}
