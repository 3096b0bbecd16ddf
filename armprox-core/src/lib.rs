//! ArmProx Core Library
//!
//! Locus-ordered record sequences, per-arm proximity counting, and the
//! tab-separated formats they are read from and written to.

pub mod types;
pub mod sequence;
pub mod proximity;
pub mod io;

// Re-export commonly used types and functions
pub use types::{compare_records, Arm, ArmSummary, GeometricPoint, Locus, Record};
pub use sequence::{OrderedRecordSequence, SequenceError};
pub use proximity::{ProximityCounter, ProximityError};
pub use io::{load_sequence, read_summary_file, write_summary_file};

/// Version information for the ArmProx core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
