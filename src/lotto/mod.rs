//! Core Lotto archive import pipeline.

pub mod codec;
pub mod error;
pub mod models;
pub mod parser;
pub mod store;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use self::error::{LottoError, Result};
use self::models::Draw;

/// An imported draw archive.
///
/// Holds the full in-memory draw sequence, built once by
/// [`Archive::import`] and read-only afterwards: [`Archive::save`] writes
/// it out as packed records and [`Archive::verify`] re-reads the written
/// bytes and compares them bit for bit.
#[derive(Debug)]
pub struct Archive {
    draws: Vec<Draw>,
}

impl Archive {
    /// Import every year in `start_year..=end_year` from `dir`.
    ///
    /// Each year is read from `{year:04}.txt` under `dir`, in ascending
    /// order; draws are appended in file, line and wheel order. The first
    /// failure aborts the whole run — later years are not attempted.
    ///
    /// # Errors
    /// Returns an error if:
    /// - a year's input file is absent or not a regular file
    /// - a year's header or any record line is structurally invalid
    pub fn import(dir: &Path, start_year: u16, end_year: u16) -> Result<Archive> {
        let mut draws = Vec::new();

        for year in start_year..=end_year {
            info!("processing year {}", year);
            let path = dir.join(format!("{:04}.txt", year));
            if !path.is_file() {
                return Err(LottoError::MissingInput { path });
            }
            let file = File::open(&path)?;
            parser::parse_year(BufReader::new(file), year, &mut draws)?;
        }

        info!(
            "imported {} draws from years {}-{}",
            draws.len(),
            start_year,
            end_year
        );
        Ok(Archive { draws })
    }

    /// The materialized draw sequence, in import order.
    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// Write the packed database to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        info!(
            "saving {} records to {}",
            self.draws.len(),
            path.display()
        );
        let mut writer = BufWriter::new(File::create(path)?);
        store::write_archive(&mut writer, &self.draws)?;
        writer.flush()?;
        Ok(())
    }

    /// Re-read `path` and compare it bit for bit against the sequence.
    pub fn verify(&self, path: &Path) -> Result<()> {
        info!(
            "verifying {} against {} in-memory records",
            path.display(),
            self.draws.len()
        );
        if !path.is_file() {
            return Err(LottoError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let mut reader = BufReader::new(File::open(path)?);
        store::verify_archive(&mut reader, &self.draws)
    }
}
