//! Errors
//!
//! Custom error types used throughout the `triage` crate.
use thiserror::Error;

/// Errors that can occur while building, scoring or searching diagnosis trees.
#[derive(Debug, Error, PartialEq)]
pub enum TriageError {
    /// A metric was requested over zero records.
    #[error("Unable to score a tree against an empty set of records.")]
    EmptyInput,
    /// An input did not have the expected shape.
    #[error("Malformed input: {0}")]
    TypeMismatch(String),
    /// First value is the requested depth, second is the number of questions available.
    #[error("Invalid depth {0}, expected a depth between 0 and {1}.")]
    InvalidDepth(usize, usize),
    /// A question identifier appears more than once in the question list.
    #[error("The question {0} is repeated in the question list.")]
    DuplicateQuestion(String),
    /// Unable to start the worker pool used for the search.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
    /// Unable to read records or configuration.
    #[error("Unable to read from a file {0}")]
    UnableToRead(String),
    /// Unable to write configuration to file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
}
