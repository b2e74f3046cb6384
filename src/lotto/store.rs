//! Flat binary persistence of the draw sequence.
//!
//! The database is nothing but the packed records themselves: 8 bytes per
//! draw, most significant byte first, with no header, length prefix or
//! footer. The write side and the verify side share the codec, so the
//! file is valid exactly when every record reads back bit for bit.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, error};

use super::codec;
use super::error::{LottoError, Result};
use super::models::Draw;

/// Write every draw as one big-endian 64-bit record.
///
/// The output is exactly `8 x draws.len()` bytes.
pub fn write_archive<W: Write>(writer: &mut W, draws: &[Draw]) -> Result<()> {
    for draw in draws {
        writer.write_u64::<BigEndian>(codec::encode(draw))?;
    }
    debug!("wrote {} records ({} bytes)", draws.len(), draws.len() * 8);
    Ok(())
}

/// Re-read a written database and compare it record by record.
///
/// Record indexes in errors are 1-based. The first divergence aborts
/// verification; its decoded field breakdown (expected and found) is
/// logged before the error is returned.
///
/// # Errors
/// - [`LottoError::TruncatedFile`] when fewer than 8 bytes remain for the
///   next expected record
/// - [`LottoError::RecordMismatch`] on the first differing record
pub fn verify_archive<R: Read>(reader: &mut R, draws: &[Draw]) -> Result<()> {
    for (i, draw) in draws.iter().enumerate() {
        let index = i + 1;
        let expected = codec::encode(draw);
        let found = match reader.read_u64::<BigEndian>() {
            Ok(value) => value,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(LottoError::TruncatedFile { index });
            }
            Err(e) => return Err(e.into()),
        };
        if found != expected {
            error!("record {} diverges from the in-memory sequence", index);
            error!("expected: {:?}", codec::decode(expected));
            error!("found:    {:?}", codec::decode(found));
            return Err(LottoError::RecordMismatch {
                index,
                expected,
                found,
            });
        }
    }
    debug!("verified {} records", draws.len());
    Ok(())
}
