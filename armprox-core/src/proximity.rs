//! Per-arm proximity counting
//!
//! Sweeps a locus-sorted sequence once. For every record, all later records
//! on the same arm are compared against it; the running count for an arm is
//! flushed into an [`ArmSummary`] when the sweep reaches the arm's last record.
//! Work inside an arm is quadratic in the arm's size.

use thiserror::Error;

use crate::sequence::OrderedRecordSequence;
use crate::types::{ArmSummary, PairCount};

#[derive(Debug, Error)]
pub enum ProximityError {
    #[error("Distance threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

/// Counts same-arm record pairs whose distance is within an inclusive threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityCounter {
    threshold: f64,
}

impl ProximityCounter {
    pub fn new(threshold: f64) -> Result<Self, ProximityError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ProximityError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// One summary per arm, in the sequence's (ascending locus) order.
    pub fn count(&self, sequence: &OrderedRecordSequence) -> Vec<ArmSummary> {
        let mut summaries = Vec::new();
        let mut count: PairCount = 0;
        let mut cursor = sequence.cursor();

        while let Some(left) = cursor.record() {
            let closes_run = match cursor.next_record() {
                Some(next) => !left.same_arm(next),
                None => true,
            };

            if closes_run {
                log::debug!("Arm {}: {} close pairs", left.locus, count);
                summaries.push(ArmSummary::new(left.locus, count));
                count = 0;
            } else {
                count += cursor
                    .following()
                    .take_while(|right| left.same_arm(right))
                    .filter(|right| left.distance_to(right) <= self.threshold)
                    .count() as PairCount;
            }

            cursor.advance();
        }

        summaries
    }
}
