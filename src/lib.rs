//! # lottodb
//!
//! Importer for multi-year archives of Italian Lotto draws.
//!
//! Parses the fixed-format yearly text files (`1871.txt` .. `2020.txt`),
//! packs every materialized draw into a fixed-width 64-bit record and
//! writes the full sequence as a flat big-endian binary database, which is
//! then re-read and compared bit for bit against the in-memory sequence.
pub mod lotto;

// Re-export the main types for convenience
pub use lotto::{
    error::{LottoError, Result},
    models::{Draw, Month, Wheel},
    Archive,
};
