use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type Chromosome = u32;
pub type PairCount = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocusError {
    #[error("Missing chromosome arm marker (expected trailing 'p' or 'q'): {0:?}")]
    MissingArm(String),
    #[error("Invalid chromosome number: {0:?}")]
    InvalidChromosome(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("Position must be wrapped in parentheses: {0:?}")]
    Unwrapped(String),
    #[error("Position must contain exactly two comma-separated coordinates: {0:?}")]
    Arity(String),
    #[error("Invalid coordinate value: {0:?}")]
    InvalidCoordinate(String),
}

/// Chromosome arm. The short arm `p` sorts before the long arm `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Arm {
    P,
    Q,
}

impl TryFrom<char> for Arm {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' => Ok(Arm::P),
            'q' => Ok(Arm::Q),
            other => Err(other),
        }
    }
}

impl From<Arm> for char {
    fn from(arm: Arm) -> Self {
        match arm {
            Arm::P => 'p',
            Arm::Q => 'q',
        }
    }
}

/// Chromosome number plus arm, e.g. `3p`.
///
/// Field order matters: the derived `Ord` compares `chromosome` first and
/// falls back to `arm`, which is the sort key for the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Locus {
    pub chromosome: Chromosome,
    pub arm: Arm,
}

impl Locus {
    pub fn new(chromosome: Chromosome, arm: Arm) -> Self {
        Self { chromosome, arm }
    }
}

impl FromStr for Locus {
    type Err = LocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let arm = trimmed
            .chars()
            .last()
            .and_then(|c| Arm::try_from(c).ok())
            .ok_or_else(|| LocusError::MissingArm(s.to_string()))?;

        // Both markers are ASCII, so dropping one byte is safe
        let prefix = &trimmed[..trimmed.len() - 1];
        let chromosome = prefix
            .parse::<Chromosome>()
            .map_err(|_| LocusError::InvalidChromosome(s.to_string()))?;

        Ok(Self { chromosome, arm })
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chromosome, char::from(self.arm))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricPoint {
    pub x: f64,
    pub y: f64,
}

impl GeometricPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in the plane.
    pub fn distance_to(&self, other: &GeometricPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl FromStr for GeometricPoint {
    type Err = PositionError;

    /// Parse the literal `(x,y)` form used in record files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| PositionError::Unwrapped(s.to_string()))?;

        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 2 {
            return Err(PositionError::Arity(s.to_string()));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| PositionError::InvalidCoordinate(parts[0].to_string()))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| PositionError::InvalidCoordinate(parts[1].to_string()))?;

        Ok(Self { x, y })
    }
}

impl fmt::Display for GeometricPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One input row: an opaque identifier placed on a chromosome arm and in the plane.
///
/// Records deliberately do not implement `Ord`: two records on the same locus
/// are not ranked against each other, their relative order comes from insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub locus: Locus,
    pub position: GeometricPoint,
}

impl Record {
    pub fn new(id: impl Into<String>, locus: Locus, position: GeometricPoint) -> Self {
        Self {
            id: id.into(),
            locus,
            position,
        }
    }

    /// Three-way comparison on locus only.
    pub fn cmp_locus(&self, other: &Record) -> Ordering {
        self.locus.cmp(&other.locus)
    }

    pub fn same_arm(&self, other: &Record) -> bool {
        self.locus == other.locus
    }

    pub fn distance_to(&self, other: &Record) -> f64 {
        self.position.distance_to(&other.position)
    }

    pub fn arm_label(&self) -> String {
        self.locus.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.id, self.locus, self.position)
    }
}

/// Explicit ordering function for records, usable with `sort_by` and friends.
pub fn compare_records(a: &Record, b: &Record) -> Ordering {
    a.cmp_locus(b)
}

/// Number of close pairs found on one chromosome arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmSummary {
    pub locus: Locus,
    pub pair_count: PairCount,
}

impl ArmSummary {
    pub fn new(locus: Locus, pair_count: PairCount) -> Self {
        Self { locus, pair_count }
    }

    pub fn arm_label(&self) -> String {
        self.locus.to_string()
    }
}
