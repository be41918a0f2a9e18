//! CP56Time2a absolute time tag.

use crate::error::{Iec60870Error, Result};

/// CP56Time2a timestamp (7 bytes on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cp56Time2a {
    /// Milliseconds within the minute (0-59999)
    pub milliseconds: u16,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Hours (0-23)
    pub hours: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Day of week (1-7, 1=Monday, 0=unused)
    pub day_of_week: u8,
    /// Month (1-12)
    pub month: u8,
    /// Year (0-99, years since 2000)
    pub year: u8,
    /// Invalid flag
    pub invalid: bool,
    /// Summer time flag
    pub summer_time: bool,
}

impl Cp56Time2a {
    /// Encoded size on the wire.
    pub const ENCODED_LEN: usize = 7;

    /// Parse from 7 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(Iec60870Error::truncated(Self::ENCODED_LEN, bytes.len()));
        }

        Ok(Self {
            milliseconds: u16::from_le_bytes([bytes[0], bytes[1]]),
            minutes: bytes[2] & 0x3F,
            invalid: (bytes[2] & 0x80) != 0,
            hours: bytes[3] & 0x1F,
            summer_time: (bytes[3] & 0x80) != 0,
            day: bytes[4] & 0x1F,
            day_of_week: (bytes[4] >> 5) & 0x07,
            month: bytes[5] & 0x0F,
            year: bytes[6] & 0x7F,
        })
    }

    /// Encode to 7 bytes.
    pub fn to_bytes(&self) -> [u8; 7] {
        let ms = self.milliseconds.to_le_bytes();
        [
            ms[0],
            ms[1],
            (self.minutes & 0x3F) | if self.invalid { 0x80 } else { 0 },
            (self.hours & 0x1F) | if self.summer_time { 0x80 } else { 0 },
            (self.day & 0x1F) | ((self.day_of_week & 0x07) << 5),
            self.month & 0x0F,
            self.year & 0x7F,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let time = Cp56Time2a {
            milliseconds: 45123,
            minutes: 59,
            hours: 23,
            day: 31,
            day_of_week: 7,
            month: 12,
            year: 99,
            invalid: true,
            summer_time: true,
        };

        let parsed = Cp56Time2a::from_bytes(&time.to_bytes()).unwrap();
        assert_eq!(parsed, time);
    }

    #[test]
    fn test_flag_bits() {
        let mut bytes = [0u8; 7];
        bytes[2] = 0x80 | 30; // invalid + 30 minutes
        bytes[3] = 0x80 | 12; // summer time + 12 hours

        let time = Cp56Time2a::from_bytes(&bytes).unwrap();
        assert!(time.invalid);
        assert!(time.summer_time);
        assert_eq!(time.minutes, 30);
        assert_eq!(time.hours, 12);
    }

    #[test]
    fn test_too_short() {
        let err = Cp56Time2a::from_bytes(&[0u8; 6]).unwrap_err();
        assert!(matches!(
            err,
            Iec60870Error::TruncatedFrame { expected: 7, actual: 6 }
        ));
    }
}
