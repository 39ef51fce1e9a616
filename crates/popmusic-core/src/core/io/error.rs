use crate::core::models::record::ResidueKey;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error while reading '{file}': {source}", file = file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed line {line} in '{file}': {kind} (content: '{content}')", file = file.display())]
    Malformed {
        file: PathBuf,
        line: usize,
        content: String,
        kind: ParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected} whitespace-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid integer for field '{field}' (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("invalid float for field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("residue {key} is listed more than once")]
    DuplicateResidue { key: ResidueKey },
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Error)]
pub enum FileDiscoveryError {
    #[error("Cannot read directory '{directory}': {source}", directory = directory.display())]
    Io {
        directory: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No '*.{extension}' file found in '{directory}'", directory = directory.display())]
    Missing {
        directory: PathBuf,
        extension: &'static str,
    },
}
