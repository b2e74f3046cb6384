//! Domain vocabulary for the Lotto archive.
//!
//! This module defines the closed enumerations used throughout the crate:
//! - Draw locations (wheels)
//! - Month abbreviations
//! - The decoded draw itself

use std::fmt;

/// A draw location ("ruota") of the Italian Lotto.
///
/// Ten city wheels plus `Nazionale` carry actual draws. `Tutte` is the
/// catch-all "all wheels" category some headers use; `Unknown` is the
/// parse-failure sentinel and never appears in a persisted draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Wheel {
    Nazionale = 0,
    Bari = 1,
    Cagliari = 2,
    Firenze = 3,
    Genova = 4,
    Milano = 5,
    Napoli = 6,
    Palermo = 7,
    Roma = 8,
    Torino = 9,
    Venezia = 10,
    Tutte = 11,
    Unknown = 12,
}

impl Wheel {
    /// Returns the canonical uppercase name of this wheel.
    ///
    /// The sentinel formats as `"UNKNOWN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Wheel::Nazionale => "NAZIONALE",
            Wheel::Bari => "BARI",
            Wheel::Cagliari => "CAGLIARI",
            Wheel::Firenze => "FIRENZE",
            Wheel::Genova => "GENOVA",
            Wheel::Milano => "MILANO",
            Wheel::Napoli => "NAPOLI",
            Wheel::Palermo => "PALERMO",
            Wheel::Roma => "ROMA",
            Wheel::Torino => "TORINO",
            Wheel::Venezia => "VENEZIA",
            Wheel::Tutte => "TUTTE",
            Wheel::Unknown => "UNKNOWN",
        }
    }

    /// Case-insensitive lookup of a wheel name.
    ///
    /// Anything that is not a known wheel name (or the `ALL` alias for
    /// `Tutte`) yields [`Wheel::Unknown`]; callers check for the sentinel
    /// instead of handling an error.
    pub fn parse(name: &str) -> Wheel {
        match name.to_ascii_uppercase().as_str() {
            "NAZIONALE" => Wheel::Nazionale,
            "BARI" => Wheel::Bari,
            "CAGLIARI" => Wheel::Cagliari,
            "FIRENZE" => Wheel::Firenze,
            "GENOVA" => Wheel::Genova,
            "MILANO" => Wheel::Milano,
            "NAPOLI" => Wheel::Napoli,
            "PALERMO" => Wheel::Palermo,
            "ROMA" => Wheel::Roma,
            "TORINO" => Wheel::Torino,
            "VENEZIA" => Wheel::Venezia,
            "TUTTE" | "ALL" => Wheel::Tutte,
            _ => Wheel::Unknown,
        }
    }

    /// Total inverse of the packed 4-bit wheel field.
    ///
    /// Bit patterns with no assigned wheel (13-15) fall back to the
    /// sentinel so that record decoding never fails.
    pub fn from_bits(bits: u8) -> Wheel {
        match bits {
            0 => Wheel::Nazionale,
            1 => Wheel::Bari,
            2 => Wheel::Cagliari,
            3 => Wheel::Firenze,
            4 => Wheel::Genova,
            5 => Wheel::Milano,
            6 => Wheel::Napoli,
            7 => Wheel::Palermo,
            8 => Wheel::Roma,
            9 => Wheel::Torino,
            10 => Wheel::Venezia,
            11 => Wheel::Tutte,
            _ => Wheel::Unknown,
        }
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar month, as abbreviated in the archive files.
///
/// `Null` is the transient "unset" sentinel produced when a token matches
/// no abbreviation; it is never stored in a persisted draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Month {
    Null = 0,
    Gen = 1,
    Feb = 2,
    Mar = 3,
    Apr = 4,
    Mag = 5,
    Giu = 6,
    Lug = 7,
    Ago = 8,
    Set = 9,
    Ott = 10,
    Nov = 11,
    Dic = 12,
}

impl Month {
    /// Returns the canonical three-letter abbreviation.
    ///
    /// The sentinel formats as `"UNKNOWN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Gen => "GEN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::Mag => "MAG",
            Month::Giu => "GIU",
            Month::Lug => "LUG",
            Month::Ago => "AGO",
            Month::Set => "SET",
            Month::Ott => "OTT",
            Month::Nov => "NOV",
            Month::Dic => "DIC",
            Month::Null => "UNKNOWN",
        }
    }

    /// Case-insensitive lookup of a month abbreviation.
    ///
    /// Unmapped input yields [`Month::Null`]; callers check for the
    /// sentinel.
    pub fn parse(name: &str) -> Month {
        match name.to_ascii_uppercase().as_str() {
            "GEN" => Month::Gen,
            "FEB" => Month::Feb,
            "MAR" => Month::Mar,
            "APR" => Month::Apr,
            "MAG" => Month::Mag,
            "GIU" => Month::Giu,
            "LUG" => Month::Lug,
            "AGO" => Month::Ago,
            "SET" => Month::Set,
            "OTT" => Month::Ott,
            "NOV" => Month::Nov,
            "DIC" => Month::Dic,
            _ => Month::Null,
        }
    }

    /// Total inverse of the packed 4-bit month field.
    pub fn from_bits(bits: u8) -> Month {
        match bits {
            1 => Month::Gen,
            2 => Month::Feb,
            3 => Month::Mar,
            4 => Month::Apr,
            5 => Month::Mag,
            6 => Month::Giu,
            7 => Month::Lug,
            8 => Month::Ago,
            9 => Month::Set,
            10 => Month::Ott,
            11 => Month::Nov,
            12 => Month::Dic,
            _ => Month::Null,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single decoded draw: one wheel on one date with up to five numbers.
///
/// `numbers[i] == 0` marks a slot that was blank (`--`) in the source
/// text. A draw is only materialized when its first number is present, so
/// `numbers[0]` is always in 1-90 for draws built by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub wheel: Wheel,
    pub day: u8,
    pub month: Month,
    pub year: u16,
    pub numbers: [u8; 5],
}
