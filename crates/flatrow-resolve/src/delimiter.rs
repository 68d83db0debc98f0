//! Output delimiter validation.
//!
//! The downstream row parser expects a single-byte ASCII separator. Users
//! spell it either as one literal character (`,`) or as a 4-character hex
//! escape (`\x09` for tab).

use flatrow_core::error::{Error, Result};

const HEX_PREFIX: &str = "\\x";
const VALID_LENGTH_HEX: usize = 4;

/// Resolve and validate a delimiter spec into its single byte.
pub fn resolve_delimiter(spec: &str) -> Result<u8> {
    if let Some(hex) = spec.strip_prefix(HEX_PREFIX) {
        if spec.len() != VALID_LENGTH_HEX {
            return Err(Error::InvalidConfig(format!(
                "invalid hexadecimal value for delimiter (got {spec:?})"
            )));
        }
        let byte = u8::from_str_radix(hex, 16).map_err(|_| {
            Error::InvalidConfig(format!(
                "invalid hexadecimal value for delimiter (got {spec:?})"
            ))
        })?;
        if byte > 0x7F {
            return Err(Error::InvalidConfig(format!(
                "delimiter must be a single ASCII character (got non-ASCII byte 0x{byte:02X})"
            )));
        }
        return Ok(byte);
    }

    let mut chars = spec.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(Error::InvalidConfig(format!(
            "delimiter must be a single ASCII character or a \\xHH sequence (got {spec:?})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_char() {
        assert_eq!(resolve_delimiter(",").unwrap(), b',');
        assert_eq!(resolve_delimiter("|").unwrap(), b'|');
    }

    #[test]
    fn hex_escape() {
        assert_eq!(resolve_delimiter("\\x09").unwrap(), 0x09);
        assert_eq!(resolve_delimiter("\\x7F").unwrap(), 0x7F);
        assert_eq!(resolve_delimiter("\\x2c").unwrap(), b',');
    }

    #[test]
    fn hex_escape_must_be_ascii() {
        assert!(matches!(
            resolve_delimiter("\\x80"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn hex_escape_must_be_four_chars() {
        assert!(resolve_delimiter("\\x9").is_err());
        assert!(resolve_delimiter("\\x009").is_err());
        assert!(resolve_delimiter("\\xZZ").is_err());
    }

    #[test]
    fn literal_must_be_one_ascii_char() {
        assert!(resolve_delimiter("ab").is_err());
        assert!(resolve_delimiter("").is_err());
        assert!(resolve_delimiter("é").is_err());
    }
}
