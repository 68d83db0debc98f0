use thiserror::Error;

/// Canonical result for the resolver crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed delimiter spec, partition-keys token, or partition literal.
    /// Fatal at resolver construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A serde token, partition type name, primitive category, or shape
    /// category the resolver does not recognize. Never coerced.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A record whose structure disagrees with its declared shape (null
    /// composite, child count mismatch, value/type mismatch) or that the
    /// external deserializer rejected. Fatal for that record only.
    #[error("Bad record: {0}")]
    BadRecord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_name_the_failure_class() {
        assert_eq!(
            Error::InvalidConfig("x".into()).to_string(),
            "Invalid configuration: x"
        );
        assert_eq!(
            Error::UnsupportedType("y".into()).to_string(),
            "Unsupported type: y"
        );
        assert_eq!(Error::BadRecord("z".into()).to_string(), "Bad record: z");
    }
}
