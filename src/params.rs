//! Per-connection field width configuration.
//!
//! IEC 60870-5 leaves the width of the cause of transmission, the common
//! address and the information object address to per-system agreement.
//! The companion standard -104 fixes them at 2/2/3; -101 links may use
//! narrower fields. Every encode and decode call reads these widths.

use crate::error::{Iec60870Error, Result};

/// Immutable field width configuration for one connection.
///
/// Created once at connection setup and never mutated afterwards, so it is
/// safe to share freely across threads and ASDUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionParameters {
    size_of_cot: u8,
    size_of_ca: u8,
    size_of_ioa: u8,
}

impl Default for ConnectionParameters {
    /// The fixed IEC 60870-5-104 profile: COT 2, CA 2, IOA 3.
    fn default() -> Self {
        Self {
            size_of_cot: 2,
            size_of_ca: 2,
            size_of_ioa: 3,
        }
    }
}

impl ConnectionParameters {
    /// Create parameters with explicit widths.
    ///
    /// Valid ranges: COT 1-2 bytes, CA 1-2 bytes, IOA 1-3 bytes.
    pub fn new(size_of_cot: u8, size_of_ca: u8, size_of_ioa: u8) -> Result<Self> {
        if !(1..=2).contains(&size_of_cot) {
            return Err(Iec60870Error::value_out_of_range(format!(
                "COT size must be 1 or 2, got {size_of_cot}"
            )));
        }
        if !(1..=2).contains(&size_of_ca) {
            return Err(Iec60870Error::value_out_of_range(format!(
                "CA size must be 1 or 2, got {size_of_ca}"
            )));
        }
        if !(1..=3).contains(&size_of_ioa) {
            return Err(Iec60870Error::value_out_of_range(format!(
                "IOA size must be 1, 2 or 3, got {size_of_ioa}"
            )));
        }
        Ok(Self {
            size_of_cot,
            size_of_ca,
            size_of_ioa,
        })
    }

    /// Size of the cause of transmission field in bytes (1 or 2).
    ///
    /// A 2-byte COT carries the originator address in its second byte.
    #[inline]
    pub const fn size_of_cot(&self) -> usize {
        self.size_of_cot as usize
    }

    /// Size of the common address field in bytes (1 or 2).
    #[inline]
    pub const fn size_of_ca(&self) -> usize {
        self.size_of_ca as usize
    }

    /// Size of the information object address field in bytes (1, 2 or 3).
    #[inline]
    pub const fn size_of_ioa(&self) -> usize {
        self.size_of_ioa as usize
    }

    /// Length of the ASDU header for these widths: type id + VSQ + COT + CA.
    #[inline]
    pub const fn asdu_header_len(&self) -> usize {
        2 + self.size_of_cot() + self.size_of_ca()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_iec104_profile() {
        let params = ConnectionParameters::default();
        assert_eq!(params.size_of_cot(), 2);
        assert_eq!(params.size_of_ca(), 2);
        assert_eq!(params.size_of_ioa(), 3);
        assert_eq!(params.asdu_header_len(), 6);
    }

    #[test]
    fn test_new_valid_widths() {
        let params = ConnectionParameters::new(1, 1, 2).unwrap();
        assert_eq!(params.size_of_cot(), 1);
        assert_eq!(params.size_of_ca(), 1);
        assert_eq!(params.size_of_ioa(), 2);
        assert_eq!(params.asdu_header_len(), 4);
    }

    #[test]
    fn test_new_rejects_invalid_widths() {
        assert!(ConnectionParameters::new(0, 2, 3).is_err());
        assert!(ConnectionParameters::new(3, 2, 3).is_err());
        assert!(ConnectionParameters::new(2, 0, 3).is_err());
        assert!(ConnectionParameters::new(2, 3, 3).is_err());
        assert!(ConnectionParameters::new(2, 2, 0).is_err());
        assert!(ConnectionParameters::new(2, 2, 4).is_err());
    }
}
