use std::{io, num::ParseFloatError};
use thiserror::Error;

/// Configuration errors. These abort a synthesis before any partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisErrors {
    #[error("Coefficient row {row} has {found} values but the model has {expected} epochs")]
    RowLengthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("A model needs at least two epochs, got {0}")]
    TooFewEpochs(usize),
    #[error("Epochs must be strictly increasing (epoch {index} = {value})")]
    EpochsNotIncreasing { index: usize, value: f64 },
    #[error("Expected {expected} coefficient rows for nmax = {nmax}, got {found}")]
    CoefficientCount {
        nmax: usize,
        expected: usize,
        found: usize,
    },
    #[error("Only positive nmin is allowed, got {0}")]
    InvalidMinDegree(usize),
    #[error("Nothing to compute: nmax < nmin ({nmax} < {nmin})")]
    DegreeOrder { nmin: usize, nmax: usize },
    #[error("Colatitude {0} is outside the bounds [0, 180]")]
    ColatitudeOutOfBounds(f64),
    #[error("Date {0} is not a finite decimal year")]
    InvalidDate(f64),
    #[error("Latitude {degrees} deg {minutes} min is out of bounds")]
    LatitudeOutOfBounds { degrees: f64, minutes: f64 },
    #[error("Longitude {degrees} deg {minutes} min is out of bounds")]
    LongitudeOutOfBounds { degrees: f64, minutes: f64 },
    #[error("Radius {0} km is below the core-mantle boundary (3485 km)")]
    RadiusBelowCmb(f64),
    #[error("Unknown IGRF generation {0}, expected 1 to 14")]
    InvalidGeneration(u8),
}

/// Errors raised while reading an SHC coefficient file.
#[derive(Error, Debug)]
pub enum ShcErrors {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Float parsing error on line {line}: {source}")]
    ParseFloat {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
    #[error("No parameter line found in {0}")]
    MissingHeader(String),
    #[error("Parameter {value} on line {line} is not a non-negative integer")]
    InvalidHeader { line: usize, value: f64 },
    #[error("Expected {expected} data values but found {found}")]
    TruncatedData { expected: usize, found: usize },
    #[error("Invalid model: {0}")]
    InvalidModel(#[from] SynthesisErrors),
}
