//! Error types for the IEC 60870-5 ASDU codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Iec60870Error>;

/// IEC 60870-5 ASDU codec error types.
///
/// All failures are local and synchronous: a decode or encode call either
/// succeeds completely or reports one of these without partial output.
#[derive(Debug, Error)]
pub enum Iec60870Error {
    /// Buffer shorter than the declared field widths require
    #[error("Truncated frame: need {expected} bytes, have {actual}")]
    TruncatedFrame {
        /// Minimum length the configured widths imply
        expected: usize,
        /// Length actually available
        actual: usize,
    },

    /// Unknown type identifier
    #[error("Unknown type ID: {0}")]
    UnknownTypeId(u8),

    /// Element index outside the decodable range of the payload
    #[error("Element index {index} out of range ({count} elements)")]
    ElementOutOfRange { index: usize, count: usize },

    /// Numeric field outside its legal encoding domain
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Structurally invalid ASDU or misuse of the envelope
    #[error("Invalid ASDU: {0}")]
    InvalidAsdu(String),
}

impl Iec60870Error {
    /// Create a truncated-frame error.
    pub fn truncated(expected: usize, actual: usize) -> Self {
        Self::TruncatedFrame { expected, actual }
    }

    /// Create a value-out-of-range error with a message.
    pub fn value_out_of_range(msg: impl Into<String>) -> Self {
        Self::ValueOutOfRange(msg.into())
    }

    /// Create an invalid ASDU error.
    pub fn invalid_asdu(msg: impl Into<String>) -> Self {
        Self::InvalidAsdu(msg.into())
    }

    /// Check if this error indicates a malformed or too-short frame.
    pub fn is_parsing_error(&self) -> bool {
        matches!(
            self,
            Self::TruncatedFrame { .. } | Self::UnknownTypeId(_) | Self::InvalidAsdu(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Iec60870Error::truncated(10, 4);
        assert_eq!(err.to_string(), "Truncated frame: need 10 bytes, have 4");

        let err = Iec60870Error::UnknownTypeId(255);
        assert_eq!(err.to_string(), "Unknown type ID: 255");

        let err = Iec60870Error::ElementOutOfRange { index: 3, count: 2 };
        assert_eq!(err.to_string(), "Element index 3 out of range (2 elements)");
    }

    #[test]
    fn test_is_parsing_error() {
        assert!(Iec60870Error::truncated(6, 0).is_parsing_error());
        assert!(Iec60870Error::UnknownTypeId(200).is_parsing_error());
        assert!(!Iec60870Error::value_out_of_range("count").is_parsing_error());
        assert!(!Iec60870Error::ElementOutOfRange { index: 1, count: 1 }.is_parsing_error());
    }
}
