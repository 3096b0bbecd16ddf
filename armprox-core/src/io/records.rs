//! Record file parser
//!
//! One record per line, three tab-separated fields:
//! `id<TAB>locus<TAB>(x,y)`, for example `seq1\t3p\t(0.5,1.25)`.
//! Ids are opaque, so a leading `#` is part of the id. Blank lines are
//! skipped; fields past the third are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::{Context, Result};
use thiserror::Error;

use crate::types::{GeometricPoint, Locus, LocusError, PositionError, Record};

const MIN_FIELDS: usize = 3;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid record line: insufficient fields (expected at least 3, got {0})")]
    FieldCount(usize),
    #[error("Invalid locus: {0}")]
    Locus(#[from] LocusError),
    #[error("Invalid position: {0}")]
    Position(#[from] PositionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parser for tab-separated record files
pub struct RecordParser;

impl RecordParser {
    /// Parse a single line into a Record
    pub fn parse_line(line: &str) -> Result<Record, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(RecordError::FieldCount(fields.len()));
        }

        let locus: Locus = fields[1].parse()?;
        let position: GeometricPoint = fields[2].parse()?;

        Ok(Record::new(fields[0], locus, position))
    }

    /// Parse records from any BufRead source
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Record>> {
        RecordIterator::new(reader).collect()
    }

    /// Stream records from a file without materialising them first
    pub fn iter_file<P: AsRef<Path>>(path: P) -> Result<RecordIterator<BufReader<File>>> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open record file: {}", path.as_ref().display()))?;
        Ok(RecordIterator::new(BufReader::new(file)))
    }
}

/// Iterator over records in a reader
pub struct RecordIterator<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
}

impl<R: BufRead> RecordIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();

            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim_end_matches(['\r', '\n']);

                    if line.trim().is_empty() {
                        continue;
                    }

                    let line_number = self.line_number;
                    return Some(RecordParser::parse_line(line).map_err(|e| {
                        anyhow::Error::new(e).context(format!("Error parsing line {}", line_number))
                    }));
                }
                Err(e) => return Some(Err(RecordError::Io(e).into())),
            }
        }
    }
}
