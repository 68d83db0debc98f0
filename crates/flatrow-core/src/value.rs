//! Typed value model and shape descriptors.
//!
//! `Datum` is what an external deserializer produces; `RecordShape` is the
//! structural descriptor that drives traversal. A record's structure is
//! only ever inspected through its shape, never by sniffing the datum.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};

use crate::error::{Error, Result};
use crate::schema::DataType;

/// Canonical timestamp text form: `YYYY-MM-DD HH:MM:SS[.fraction]`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Fixed-point decimal: unscaled integer plus a base-10 scale, the Arrow
/// `Decimal128` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal128 {
    pub unscaled: i128,
    pub scale: u8,
}

/// Largest scale a 128-bit unscaled value can meaningfully carry.
pub const DECIMAL_MAX_SCALE: u8 = 38;

impl Decimal128 {
    pub fn new(unscaled: i128, scale: u8) -> Self {
        Self { unscaled, scale }
    }
}

impl FromStr for Decimal128 {
    type Err = Error;

    /// Parses a plain decimal literal (`-12.340`). The fractional digit
    /// count becomes the scale; no normalization is applied.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidConfig(format!("invalid decimal literal: {s:?}"));
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(bad());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(bad());
        }
        if frac_part.len() > DECIMAL_MAX_SCALE as usize {
            return Err(Error::InvalidConfig(format!(
                "decimal literal {s:?} exceeds maximum scale {DECIMAL_MAX_SCALE}"
            )));
        }
        let mut unscaled: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            unscaled = unscaled
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as i128))
                .ok_or_else(|| {
                    Error::InvalidConfig(format!("decimal literal {s:?} overflows 128 bits"))
                })?;
        }
        if negative {
            unscaled = -unscaled;
        }
        Ok(Self {
            unscaled,
            scale: frac_part.len() as u8,
        })
    }
}

impl fmt::Display for Decimal128 {
    /// Plain notation, natural scale kept: no exponent, no trailing-zero
    /// truncation (`12.340` stays `12.340`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }
        let scale = self.scale as usize;
        let sign = if self.unscaled < 0 { "-" } else { "" };
        let digits = self.unscaled.unsigned_abs().to_string();
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            write!(f, "{sign}0.{digits:0>scale$}")
        }
    }
}

/// Parse the canonical timestamp form; the fraction is optional.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| Error::InvalidConfig(format!("invalid timestamp literal {s:?}: {e}")))
}

/// Render the canonical timestamp form. The fraction is printed only when
/// the sub-second field is non-zero, with trailing zeros trimmed.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    let mut out = ts.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let frac = format!("{nanos:09}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// One deserialized value. `Composite` and `List` carry children; whether
/// they are legal at a given position is the shape's call, not the datum's.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(Decimal128),
    Utf8(String),
    Binary(Vec<u8>),
    Timestamp(NaiveDateTime),
    Composite(Vec<Datum>),
    List(Vec<Datum>),
}

impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }
}

/// Structural descriptor for a record position.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape {
    Primitive(DataType),
    Composite(Vec<FieldShape>),
    List(Box<RecordShape>),
    Map(Box<RecordShape>, Box<RecordShape>),
}

impl RecordShape {
    pub fn category(&self) -> &'static str {
        match self {
            RecordShape::Primitive(_) => "primitive",
            RecordShape::Composite(_) => "composite",
            RecordShape::List(_) => "list",
            RecordShape::Map(_, _) => "map",
        }
    }
}

/// A named child of a composite shape, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: String,
    pub shape: RecordShape,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, shape: RecordShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_parse_keeps_natural_scale() {
        let d: Decimal128 = "12.340".parse().unwrap();
        assert_eq!(d, Decimal128::new(12340, 3));
        assert_eq!(d.to_string(), "12.340");
    }

    #[test]
    fn decimal_small_magnitudes_pad_with_zeros() {
        assert_eq!("-0.05".parse::<Decimal128>().unwrap().to_string(), "-0.05");
        assert_eq!(".5".parse::<Decimal128>().unwrap().to_string(), "0.5");
    }

    #[test]
    fn decimal_integral_has_no_point() {
        assert_eq!("42".parse::<Decimal128>().unwrap().to_string(), "42");
        assert_eq!("-7".parse::<Decimal128>().unwrap().to_string(), "-7");
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert!("".parse::<Decimal128>().is_err());
        assert!("1.2.3".parse::<Decimal128>().is_err());
        assert!("12a".parse::<Decimal128>().is_err());
        assert!(".".parse::<Decimal128>().is_err());
    }

    #[test]
    fn timestamp_fraction_only_when_nonzero() {
        let whole = parse_timestamp("2020-01-01 00:00:00").unwrap();
        assert_eq!(format_timestamp(&whole), "2020-01-01 00:00:00");

        let frac = parse_timestamp("2020-01-01 00:00:00.123450").unwrap();
        assert_eq!(format_timestamp(&frac), "2020-01-01 00:00:00.12345");
    }

    #[test]
    fn timestamp_rejects_bad_literal() {
        assert!(parse_timestamp("2020/01/01").is_err());
    }
}
