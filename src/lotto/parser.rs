//! Line-oriented parsing of the yearly archive files.
//!
//! Each `YYYY.txt` file opens with a header line declaring the year and
//! the wheels drawn that year, followed by one line per drawing date with
//! five numbers (or `--` placeholders) per declared wheel, and an
//! optional terminating `END` line.

use std::io::BufRead;

use log::{debug, info};

use super::error::{LottoError, Result};
use super::models::{Draw, Month, Wheel};

/// Draw numbers per wheel group on a record line.
const GROUP_SIZE: usize = 5;

/// Blank-slot placeholder in record lines.
const BLANK: &str = "--";

/// Parse a strict two-character numeric token.
///
/// A leading `'0'` is stripped before the decimal parse. Zero is reserved
/// as the internal "not drawn" marker, so a parsed value of 0 is
/// rejected; in particular the literal token `"00"` never parses (blank
/// slots are spelled `"--"` instead). Range checks are left to the
/// caller.
pub fn parse_two_digit(token: &str, line: u32) -> Result<u8> {
    if token.len() != 2 {
        return Err(LottoError::MalformedNumber {
            line,
            token: token.to_string(),
        });
    }
    let digits = token.strip_prefix('0').unwrap_or(token);

    // Consume the leading run of digits; an empty run or a value of zero
    // is a malformed number.
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<u8>() {
        Ok(value) if value != 0 => Ok(value),
        _ => Err(LottoError::MalformedNumber {
            line,
            token: token.to_string(),
        }),
    }
}

/// Parse one year's archive file, appending materialized draws in order.
///
/// The first line must be a header naming `year` and that year's active
/// wheels; every following line is either a record of
/// `2 + 5 x wheels + 1` tokens or the literal `END` terminator. Reaching
/// end of input without `END` is also accepted.
///
/// # Errors
/// Any structural violation is fatal for the whole run:
/// - [`LottoError::HeaderParse`] / [`LottoError::YearMismatch`] from the
///   header line
/// - [`LottoError::MalformedRecord`] on a wrong token count
/// - [`LottoError::MalformedNumber`] / [`LottoError::ValueOutOfRange`] /
///   [`LottoError::InvalidMonth`] from the record fields
pub fn parse_year<R: BufRead>(reader: R, year: u16, draws: &mut Vec<Draw>) -> Result<()> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    let wheels = parse_header(&header, year)?;
    debug!("year {}: header declares {} wheels", year, wheels.len());

    // Day, month, five numbers per wheel, plus the trailing token that is
    // counted but never inspected.
    let expected = 2 + GROUP_SIZE * wheels.len() + 1;
    let mut line_no: u32 = 0;
    let before = draws.len();

    for line in lines {
        let line = line?;
        line_no += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() == 1 && tokens[0] == "END" {
            info!("year {}: END at record line {}", year, line_no);
            debug!("year {}: {} draws materialized", year, draws.len() - before);
            return Ok(());
        }
        if tokens.len() != expected {
            return Err(LottoError::MalformedRecord {
                line: line_no,
                found: tokens.len(),
                expected,
            });
        }

        let day = parse_two_digit(tokens[0], line_no)?;
        if day > 31 {
            return Err(LottoError::ValueOutOfRange {
                what: "day",
                line: line_no,
                value: day,
                min: 1,
                max: 31,
            });
        }
        let month = Month::parse(tokens[1]);
        if month == Month::Null {
            return Err(LottoError::InvalidMonth {
                line: line_no,
                token: tokens[1].to_string(),
            });
        }

        // Five numbers per wheel, in the order the header declared them.
        // Zipping against the wheel list also drops the trailing token.
        for (&wheel, group) in wheels.iter().zip(tokens[2..].chunks(GROUP_SIZE)) {
            let mut numbers = [0u8; 5];
            for (slot, &token) in numbers.iter_mut().zip(group) {
                if token == BLANK {
                    continue;
                }
                let n = parse_two_digit(token, line_no)?;
                if n > 90 {
                    return Err(LottoError::ValueOutOfRange {
                        what: "draw number",
                        line: line_no,
                        value: n,
                        min: 1,
                        max: 90,
                    });
                }
                *slot = n;
            }
            // A blank first slot means this wheel was not drawn that day.
            if numbers[0] != 0 {
                draws.push(Draw {
                    wheel,
                    day,
                    month,
                    year,
                    numbers,
                });
            }
        }
    }

    debug!("year {}: {} draws materialized", year, draws.len() - before);
    Ok(())
}

/// Parse the header line into the year's active-wheel list.
///
/// The first token must be the year being processed. Every other token is
/// either a wheel name (appended, in order) or a repeat of the same year,
/// which some archive files carry at the end of the header.
fn parse_header(header: &str, year: u16) -> Result<Vec<Wheel>> {
    let mut wheels = Vec::new();
    let mut tokens = header.split_whitespace();

    match tokens.next() {
        Some(token) => require_year(token, year)?,
        None => {
            return Err(LottoError::HeaderParse {
                year,
                token: String::new(),
            })
        }
    }
    for token in tokens {
        let wheel = Wheel::parse(token);
        if wheel != Wheel::Unknown {
            wheels.push(wheel);
        } else {
            require_year(token, year)?;
        }
    }

    Ok(wheels)
}

fn require_year(token: &str, year: u16) -> Result<()> {
    let found: u16 = token.parse().map_err(|_| LottoError::HeaderParse {
        year,
        token: token.to_string(),
    })?;
    if found != year {
        return Err(LottoError::YearMismatch {
            expected: year,
            found,
        });
    }
    Ok(())
}
