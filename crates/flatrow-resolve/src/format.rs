//! Row accumulator and primitive text formatting.
//!
//! One `RowBuffer` lives for the lifetime of a resolver instance and is
//! reset per record. Formatting rules follow the downstream text-row
//! parser's conventions: `\N` for SQL NULL, octal-escaped binary, and the
//! canonical numeric/timestamp forms from `flatrow_core::value`.

use std::fmt::{self, Write};

use flatrow_core::error::{Error, Result};
use flatrow_core::schema::DataType;
use flatrow_core::value::{format_timestamp, Datum};

/// Two-character NULL sentinel understood by the downstream row parser.
pub const NULL_SENTINEL: &str = "\\N";

/// Append-only accumulator for one flattened record, threading the
/// delimiter and the first-column flag explicitly.
#[derive(Debug)]
pub struct RowBuffer {
    delimiter: u8,
    buf: String,
    first_column: bool,
}

impl RowBuffer {
    pub fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            buf: String::new(),
            first_column: true,
        }
    }

    /// Clear state for the next record.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.first_column = true;
    }

    /// Start a field: emit the separator unless this is the record's
    /// first column.
    fn begin_field(&mut self) {
        if !self.first_column {
            self.buf.push(self.delimiter as char);
        }
        self.first_column = false;
    }

    fn push_value(&mut self, v: impl fmt::Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{v}");
    }

    /// Append pre-rendered text verbatim (the partition suffix carries its
    /// own leading delimiters).
    pub fn push_raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Hand out the finished row, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Append one primitive value in its canonical text form.
///
/// NULL is legal for every primitive category and always renders as the
/// sentinel. A non-null datum must carry the variant its declared type
/// names; `Date64` (and any future unhandled code) is rejected outright.
pub fn append_primitive(out: &mut RowBuffer, value: &Datum, data_type: DataType) -> Result<()> {
    out.begin_field();

    match (data_type, value) {
        (_, Datum::Null) => out.push_raw(NULL_SENTINEL),
        (DataType::Boolean, Datum::Boolean(b)) => out.push_value(b),
        (DataType::TinyInt, Datum::TinyInt(v)) => out.push_value(i16::from(*v)),
        (DataType::SmallInt, Datum::SmallInt(v)) => out.push_value(v),
        (DataType::Int32, Datum::Int32(v)) => out.push_value(v),
        (DataType::Int64, Datum::Int64(v)) => out.push_value(v),
        (DataType::Float32, Datum::Float32(v)) => out.push_value(v),
        (DataType::Float64, Datum::Float64(v)) => out.push_value(v),
        (DataType::Decimal128, Datum::Decimal(d)) => out.push_value(d),
        (DataType::Utf8, Datum::Utf8(s)) => out.push_raw(s),
        (DataType::Binary, Datum::Binary(bytes)) => append_octal(out, bytes),
        (DataType::Timestamp, Datum::Timestamp(ts)) => out.push_raw(&format_timestamp(ts)),
        (DataType::Date64, _) => {
            return Err(Error::UnsupportedType(format!(
                "{} conversion is not supported by the record resolver",
                data_type.type_name()
            )));
        }
        (expected, actual) => {
            return Err(Error::BadRecord(format!(
                "value {actual:?} does not match declared type {}",
                expected.type_name()
            )));
        }
    }
    Ok(())
}

/// Octal-escape binary for the downstream parser's bytea form: each byte
/// becomes a doubled backslash plus exactly 3 octal digits.
fn append_octal(out: &mut RowBuffer, bytes: &[u8]) {
    out.buf.reserve(bytes.len() * 5);
    for b in bytes {
        let _ = write!(out.buf, "\\\\{b:03o}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatrow_core::value::{parse_timestamp, Decimal128};

    fn buf() -> RowBuffer {
        RowBuffer::new(b',')
    }

    #[test]
    fn null_renders_sentinel_for_every_category() {
        for dt in [
            DataType::Boolean,
            DataType::TinyInt,
            DataType::Int64,
            DataType::Float64,
            DataType::Decimal128,
            DataType::Utf8,
            DataType::Binary,
            DataType::Timestamp,
        ] {
            let mut out = buf();
            append_primitive(&mut out, &Datum::Null, dt).unwrap();
            assert_eq!(out.as_str(), "\\N");
        }
    }

    #[test]
    fn delimiter_precedes_all_but_first_field() {
        let mut out = buf();
        append_primitive(&mut out, &Datum::Int32(5), DataType::Int32).unwrap();
        append_primitive(&mut out, &Datum::Utf8("x".into()), DataType::Utf8).unwrap();
        assert_eq!(out.as_str(), "5,x");
    }

    #[test]
    fn binary_octal_escaping() {
        let mut out = buf();
        append_primitive(
            &mut out,
            &Datum::Binary(vec![0x00, 0xFF, 0x41]),
            DataType::Binary,
        )
        .unwrap();
        assert_eq!(out.as_str(), "\\\\000\\\\377\\\\101");
        assert_eq!(out.as_str().len(), 15);
    }

    #[test]
    fn tinyint_promotes_to_integer() {
        let mut out = buf();
        append_primitive(&mut out, &Datum::TinyInt(-8), DataType::TinyInt).unwrap();
        assert_eq!(out.as_str(), "-8");
    }

    #[test]
    fn floats_use_shortest_round_trip_form() {
        let mut out = buf();
        append_primitive(&mut out, &Datum::Float64(1.5), DataType::Float64).unwrap();
        append_primitive(&mut out, &Datum::Float64(2.0), DataType::Float64).unwrap();
        append_primitive(&mut out, &Datum::Float32(0.25), DataType::Float32).unwrap();
        assert_eq!(out.as_str(), "1.5,2,0.25");
    }

    #[test]
    fn decimal_and_timestamp_canonical_forms() {
        let mut out = buf();
        append_primitive(
            &mut out,
            &Datum::Decimal(Decimal128::new(12340, 3)),
            DataType::Decimal128,
        )
        .unwrap();
        append_primitive(
            &mut out,
            &Datum::Timestamp(parse_timestamp("2020-06-01 12:00:00.5").unwrap()),
            DataType::Timestamp,
        )
        .unwrap();
        assert_eq!(out.as_str(), "12.340,2020-06-01 12:00:00.5");
    }

    #[test]
    fn date_is_unsupported() {
        let mut out = buf();
        let err = append_primitive(&mut out, &Datum::Int64(0), DataType::Date64).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn mismatched_value_is_a_bad_record() {
        let mut out = buf();
        let err = append_primitive(&mut out, &Datum::Utf8("5".into()), DataType::Int32).unwrap_err();
        assert!(matches!(err, Error::BadRecord(_)));
    }

    #[test]
    fn reset_clears_first_column_flag() {
        let mut out = buf();
        append_primitive(&mut out, &Datum::Int32(1), DataType::Int32).unwrap();
        out.reset();
        append_primitive(&mut out, &Datum::Int32(2), DataType::Int32).unwrap();
        assert_eq!(out.as_str(), "2");
    }
}
