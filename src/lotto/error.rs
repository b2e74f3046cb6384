//! Custom error types for the lottodb crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every failure is fatal for the run: no stage retries or skips past a
/// bad year, line or record.
#[derive(Debug, Error)]
pub enum LottoError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A year's input file is absent or not a regular file.
    #[error("input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// A header token that is neither a wheel name nor the year.
    #[error("unparsable header token {token:?} for year {year}")]
    HeaderParse { year: u16, token: String },

    /// The year declared by a file's header does not match the year being
    /// processed.
    #[error("header year mismatch: expected {expected}, found {found}")]
    YearMismatch { expected: u16, found: u16 },

    /// A numeric field token that is not a valid two-digit number.
    #[error("malformed number {token:?} at line {line}")]
    MalformedNumber { line: u32, token: String },

    /// A parsed field value outside its permitted range.
    #[error("{what} {value} out of range [{min}, {max}] at line {line}")]
    ValueOutOfRange {
        what: &'static str,
        line: u32,
        value: u8,
        min: u8,
        max: u8,
    },

    /// A month token with no matching abbreviation.
    #[error("invalid month {token:?} at line {line}")]
    InvalidMonth { line: u32, token: String },

    /// A record line with the wrong number of tokens.
    #[error("malformed record at line {line}: {found} tokens, expected {expected}")]
    MalformedRecord {
        line: u32,
        found: usize,
        expected: usize,
    },

    /// The database ended before every expected record was read back.
    #[error("truncated database: short read at record {index}")]
    TruncatedFile { index: usize },

    /// A read-back record differs from the in-memory value.
    #[error("record {index} mismatch: expected {expected:#018x}, found {found:#018x}")]
    RecordMismatch {
        index: usize,
        expected: u64,
        found: u64,
    },
}

/// A convenience `Result` type alias using the crate's `LottoError` type.
pub type Result<T> = std::result::Result<T, LottoError>;
