//! IEC 60870-5 Cause of Transmission (COT).
//!
//! The cause of transmission is the 6-bit reason code for sending an ASDU.
//! All 64 wire values are representable; the standard names the causes
//! listed as constants below, the rest are reserved or for special use.

use crate::error::{Iec60870Error, Result};

/// Cause of Transmission (COT).
///
/// A validated 6-bit value (0-63). The test and negative-confirmation flags
/// that share the wire byte are carried by the ASDU envelope, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Cot(u8);

impl Cot {
    /// Periodic, cyclic (1)
    pub const PERIODIC: Cot = Cot(1);
    /// Background scan (2)
    pub const BACKGROUND: Cot = Cot(2);
    /// Spontaneous (3)
    pub const SPONTANEOUS: Cot = Cot(3);
    /// Initialized (4)
    pub const INITIALIZED: Cot = Cot(4);
    /// Request or requested (5)
    pub const REQUEST: Cot = Cot(5);
    /// Activation (6)
    pub const ACTIVATION: Cot = Cot(6);
    /// Activation confirmation (7)
    pub const ACTIVATION_CON: Cot = Cot(7);
    /// Deactivation (8)
    pub const DEACTIVATION: Cot = Cot(8);
    /// Deactivation confirmation (9)
    pub const DEACTIVATION_CON: Cot = Cot(9);
    /// Activation termination (10)
    pub const ACTIVATION_TERMINATION: Cot = Cot(10);
    /// Return information caused by a remote command (11)
    pub const RETURN_INFO_REMOTE: Cot = Cot(11);
    /// Return information caused by a local command (12)
    pub const RETURN_INFO_LOCAL: Cot = Cot(12);
    /// File transfer (13)
    pub const FILE_TRANSFER: Cot = Cot(13);
    /// Interrogated by station interrogation (20)
    pub const INTERROGATED_BY_STATION: Cot = Cot(20);
    /// Interrogated by group 1 interrogation (21); groups 2-16 follow at 22-36
    pub const INTERROGATED_BY_GROUP_1: Cot = Cot(21);
    /// Requested by general counter request (37)
    pub const REQUESTED_BY_GENERAL_COUNTER: Cot = Cot(37);
    /// Unknown type identification (44)
    pub const UNKNOWN_TYPE_ID: Cot = Cot(44);
    /// Unknown cause of transmission (45)
    pub const UNKNOWN_COT: Cot = Cot(45);
    /// Unknown common address of ASDU (46)
    pub const UNKNOWN_COMMON_ADDRESS: Cot = Cot(46);
    /// Unknown information object address (47)
    pub const UNKNOWN_IOA: Cot = Cot(47);

    /// Create a COT, rejecting values that do not fit in 6 bits.
    #[inline]
    pub fn new(value: u8) -> Result<Self> {
        if value > 0x3F {
            return Err(Iec60870Error::value_out_of_range(format!(
                "COT must be <= 63, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Extract the COT from a wire byte (lower 6 bits; the upper two bits
    /// are the test and negative flags).
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte & 0x3F)
    }

    /// The raw 6-bit value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a positive confirmation of a command.
    #[inline]
    pub const fn is_confirmation(&self) -> bool {
        matches!(self.0, 7 | 9 | 10)
    }

    /// Check if this COT reports an unrecognized field (causes 44-47).
    #[inline]
    pub const fn is_negative_confirmation(&self) -> bool {
        matches!(self.0, 44..=47)
    }

    /// Check if this COT is a station or group interrogation response.
    #[inline]
    pub const fn is_interrogation_response(&self) -> bool {
        matches!(self.0, 20..=36)
    }

    /// Check if this COT is a counter request response.
    #[inline]
    pub const fn is_counter_response(&self) -> bool {
        matches!(self.0, 37..=41)
    }

    /// Standard name for this cause, if it has one.
    pub const fn name(&self) -> Option<&'static str> {
        Some(match self.0 {
            1 => "Periodic",
            2 => "Background",
            3 => "Spontaneous",
            4 => "Initialized",
            5 => "Request",
            6 => "Activation",
            7 => "ActivationCon",
            8 => "Deactivation",
            9 => "DeactivationCon",
            10 => "ActivationTermination",
            11 => "ReturnInfoRemote",
            12 => "ReturnInfoLocal",
            13 => "FileTransfer",
            20 => "InterrogatedByStation",
            37 => "RequestedByGeneralCounter",
            44 => "UnknownTypeId",
            45 => "UnknownCot",
            46 => "UnknownCommonAddress",
            47 => "UnknownIoa",
            _ => return None,
        })
    }
}

impl std::fmt::Display for Cot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_interrogation_response() => {
                write!(f, "InterrogatedByGroup{}", self.0 - 20)
            }
            None if self.is_counter_response() => {
                write!(f, "RequestedByGroup{}Counter", self.0 - 37)
            }
            None => write!(f, "Cot({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cot_new_bounds() {
        assert_eq!(Cot::new(6).unwrap(), Cot::ACTIVATION);
        assert_eq!(Cot::new(63).unwrap().value(), 63);
        assert!(Cot::new(64).is_err());
        assert!(Cot::new(255).is_err());
    }

    #[test]
    fn test_cot_from_byte_masks_flags() {
        // 0x86 = test flag + activation
        assert_eq!(Cot::from_byte(0x86), Cot::ACTIVATION);
        // 0x43 = negative flag + spontaneous
        assert_eq!(Cot::from_byte(0x43), Cot::SPONTANEOUS);
        // Decode is total over all 256 bytes
        assert_eq!(Cot::from_byte(0xFF).value(), 0x3F);
    }

    #[test]
    fn test_cot_predicates() {
        assert!(Cot::ACTIVATION_CON.is_confirmation());
        assert!(Cot::DEACTIVATION_CON.is_confirmation());
        assert!(Cot::ACTIVATION_TERMINATION.is_confirmation());
        assert!(!Cot::ACTIVATION.is_confirmation());

        assert!(Cot::UNKNOWN_TYPE_ID.is_negative_confirmation());
        assert!(Cot::UNKNOWN_IOA.is_negative_confirmation());
        assert!(!Cot::SPONTANEOUS.is_negative_confirmation());

        assert!(Cot::INTERROGATED_BY_STATION.is_interrogation_response());
        assert!(Cot::new(36).unwrap().is_interrogation_response());
        assert!(!Cot::SPONTANEOUS.is_interrogation_response());

        assert!(Cot::REQUESTED_BY_GENERAL_COUNTER.is_counter_response());
        assert!(!Cot::INTERROGATED_BY_STATION.is_counter_response());
    }

    #[test]
    fn test_cot_display() {
        assert_eq!(Cot::SPONTANEOUS.to_string(), "Spontaneous");
        assert_eq!(Cot::ACTIVATION.to_string(), "Activation");
        assert_eq!(Cot::new(23).unwrap().to_string(), "InterrogatedByGroup3");
        assert_eq!(Cot::new(39).unwrap().to_string(), "RequestedByGroup2Counter");
        assert_eq!(Cot::new(63).unwrap().to_string(), "Cot(63)");
    }
}
