use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between a path on stdin and a trimmed column.
///
/// All variants are recoverable from the caller's point of view: a failure is
/// terminal for the current file only, and the prompt loop moves on.
#[derive(Debug, Error)]
pub enum Error {
    /// Statistics requested on a zero-length sequence.
    #[error("cannot compute statistics on an empty column")]
    EmptyInput,

    /// Method selector outside the two supported trim methods.
    #[error("unknown trim method {0:?} (expected 'iqr'/'1' or 'stddev'/'2')")]
    InvalidMethod(String),

    /// Median rule name outside the two supported formulas.
    #[error("unknown median rule {0:?} (expected 'legacy' or 'conventional')")]
    InvalidMedianRule(String),

    /// A CSV field failed to parse as a number. Row and column are 0-based.
    #[error("row {row}, column {column}: {token:?} is not a number")]
    MalformedField {
        row: usize,
        column: usize,
        token: String,
    },

    /// The given path does not resolve to a readable file.
    #[error("cannot open {}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Low-level read failure while iterating CSV records.
    #[error("CSV read error")]
    Csv(#[from] csv::Error),
}
