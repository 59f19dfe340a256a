//! Our application errors.

use std::io;
use thiserror::Error;

use crate::geo::Axis;

/// General error type.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Malformed monitor record on line {line_number} ({source}): {line:?}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        #[source]
        source: ParseRecordError,
    },
    #[error("No monitors were parsed")]
    EmptyCollection,
    #[error("Malformed header line, expected `<text>:<count>`: {0:?}")]
    MalformedHeader(String),
    #[error("Header announced {expected} monitors but {actual} were listed")]
    CountMismatch { expected: usize, actual: usize },
    #[error("{0}")]
    IO(#[from] io::Error),
    #[error("Failed to parse config file:\n{0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("Failed to serialize config file:\n{0}")]
    SerializeConfig(#[from] toml::ser::Error),
    #[error("{0}")]
    Generic(#[from] anyhow::Error),
}

/// Errors that can happen during parsing of a single monitor line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRecordError {
    #[error("line does not have the layout `INDEX: [MARKER] W/MMxH/MM+X+Y [NAME]`")]
    Layout,
    #[error("{0:?} pixel count {1} does not fit into an integer")]
    PixelsOutOfRange(Axis, String),
}
