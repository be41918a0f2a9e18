//! IEC 60870-5 Type Identification.
//!
//! The type identifier is the first ASDU byte and fixes the physical layout
//! of every information object in the envelope. The catalog here covers the
//! monitoring types this codec can materialize plus the common command and
//! system types; every other byte is carried as [`TypeId::Uncataloged`], so
//! its envelope still parses and passes through. Decoding support for
//! further types is added in the dispatch table, not here.

/// IEC 60870-5 Type Identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    /// Single-point information (M_SP_NA_1)
    SinglePoint,
    /// Double-point information (M_DP_NA_1)
    DoublePoint,
    /// Measured value, normalized (M_ME_NA_1)
    MeasuredNormalized,
    /// Measured value, scaled (M_ME_NB_1)
    MeasuredScaled,
    /// Measured value, short floating point (M_ME_NC_1)
    MeasuredFloat,
    /// Integrated totals (M_IT_NA_1)
    IntegratedTotals,
    /// Single-point information with time tag CP56Time2a (M_SP_TB_1)
    SinglePointTime56,
    /// Double-point information with time tag CP56Time2a (M_DP_TB_1)
    DoublePointTime56,
    /// Measured value, scaled with time tag CP56Time2a (M_ME_TE_1)
    MeasuredScaledTime56,
    /// Measured value, short floating point with time tag CP56Time2a (M_ME_TF_1)
    MeasuredFloatTime56,
    /// Single command (C_SC_NA_1)
    SingleCommand,
    /// Double command (C_DC_NA_1)
    DoubleCommand,
    /// Set-point command, scaled (C_SE_NB_1)
    SetpointScaled,
    /// Set-point command, short floating point (C_SE_NC_1)
    SetpointFloat,
    /// End of initialization (M_EI_NA_1)
    EndOfInit,
    /// Interrogation command (C_IC_NA_1)
    InterrogationCommand,
    /// Clock synchronization command (C_CS_NA_1)
    ClockSync,
    /// Test command (C_TS_NA_1)
    TestCommand,
    /// Any type identification outside the catalog.
    ///
    /// The raw byte round-trips unchanged, so envelopes of uncataloged
    /// types can be received, inspected and re-transmitted, and answered
    /// with cause 44. [`from_byte`](Self::from_byte) never produces this
    /// variant for a cataloged byte.
    Uncataloged(u8),
}

impl TypeId {
    /// Create a TypeId from the raw wire byte. Total: bytes outside the
    /// catalog map to [`Uncataloged`](Self::Uncataloged).
    #[inline]
    pub const fn from_byte(value: u8) -> Self {
        match value {
            1 => Self::SinglePoint,
            3 => Self::DoublePoint,
            9 => Self::MeasuredNormalized,
            11 => Self::MeasuredScaled,
            13 => Self::MeasuredFloat,
            15 => Self::IntegratedTotals,
            30 => Self::SinglePointTime56,
            31 => Self::DoublePointTime56,
            35 => Self::MeasuredScaledTime56,
            36 => Self::MeasuredFloatTime56,
            45 => Self::SingleCommand,
            46 => Self::DoubleCommand,
            49 => Self::SetpointScaled,
            50 => Self::SetpointFloat,
            70 => Self::EndOfInit,
            100 => Self::InterrogationCommand,
            103 => Self::ClockSync,
            104 => Self::TestCommand,
            other => Self::Uncataloged(other),
        }
    }

    /// Convert to the raw wire byte.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::SinglePoint => 1,
            Self::DoublePoint => 3,
            Self::MeasuredNormalized => 9,
            Self::MeasuredScaled => 11,
            Self::MeasuredFloat => 13,
            Self::IntegratedTotals => 15,
            Self::SinglePointTime56 => 30,
            Self::DoublePointTime56 => 31,
            Self::MeasuredScaledTime56 => 35,
            Self::MeasuredFloatTime56 => 36,
            Self::SingleCommand => 45,
            Self::DoubleCommand => 46,
            Self::SetpointScaled => 49,
            Self::SetpointFloat => 50,
            Self::EndOfInit => 70,
            Self::InterrogationCommand => 100,
            Self::ClockSync => 103,
            Self::TestCommand => 104,
            Self::Uncataloged(byte) => byte,
        }
    }

    /// Check if this type is in the monitoring direction (station to master).
    #[inline]
    pub const fn is_monitoring(&self) -> bool {
        matches!(self.as_u8(), 1..=44 | 70)
    }

    /// Check if this type carries a CP56Time2a time tag.
    #[inline]
    pub const fn has_time_tag(&self) -> bool {
        matches!(
            self,
            Self::SinglePointTime56
                | Self::DoublePointTime56
                | Self::MeasuredScaledTime56
                | Self::MeasuredFloatTime56
        )
    }

    /// Get the IEC standard mnemonic (e.g. "M_ME_NB_1"), if cataloged.
    #[inline]
    pub const fn standard_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::SinglePoint => "M_SP_NA_1",
            Self::DoublePoint => "M_DP_NA_1",
            Self::MeasuredNormalized => "M_ME_NA_1",
            Self::MeasuredScaled => "M_ME_NB_1",
            Self::MeasuredFloat => "M_ME_NC_1",
            Self::IntegratedTotals => "M_IT_NA_1",
            Self::SinglePointTime56 => "M_SP_TB_1",
            Self::DoublePointTime56 => "M_DP_TB_1",
            Self::MeasuredScaledTime56 => "M_ME_TE_1",
            Self::MeasuredFloatTime56 => "M_ME_TF_1",
            Self::SingleCommand => "C_SC_NA_1",
            Self::DoubleCommand => "C_DC_NA_1",
            Self::SetpointScaled => "C_SE_NB_1",
            Self::SetpointFloat => "C_SE_NC_1",
            Self::EndOfInit => "M_EI_NA_1",
            Self::InterrogationCommand => "C_IC_NA_1",
            Self::ClockSync => "C_CS_NA_1",
            Self::TestCommand => "C_TS_NA_1",
            Self::Uncataloged(_) => return None,
        })
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.standard_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "TypeID({})", self.as_u8()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_roundtrip_cataloged() {
        let valid = [1, 3, 9, 11, 13, 15, 30, 31, 35, 36, 45, 46, 49, 50, 70, 100, 103, 104];
        for value in valid {
            let type_id = TypeId::from_byte(value);
            assert!(
                !matches!(type_id, TypeId::Uncataloged(_)),
                "{value} should be cataloged"
            );
            assert_eq!(type_id.as_u8(), value, "roundtrip failed for {value}");
        }
    }

    #[test]
    fn test_from_byte_total_over_all_bytes() {
        for value in 0..=255u8 {
            assert_eq!(TypeId::from_byte(value).as_u8(), value);
        }
    }

    #[test]
    fn test_from_byte_uncataloged_carries_byte() {
        for value in [0, 2, 7, 34, 44, 48, 64, 99, 108, 200, 255] {
            match TypeId::from_byte(value) {
                TypeId::Uncataloged(byte) => assert_eq!(byte, value),
                other => panic!("expected Uncataloged for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_direction_and_time_tag() {
        assert!(TypeId::MeasuredScaled.is_monitoring());
        assert!(TypeId::EndOfInit.is_monitoring());
        assert!(TypeId::Uncataloged(34).is_monitoring());
        assert!(!TypeId::SingleCommand.is_monitoring());
        assert!(!TypeId::InterrogationCommand.is_monitoring());

        assert!(TypeId::MeasuredScaledTime56.has_time_tag());
        assert!(TypeId::SinglePointTime56.has_time_tag());
        assert!(!TypeId::MeasuredScaled.has_time_tag());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeId::SinglePoint.to_string(), "M_SP_NA_1");
        assert_eq!(TypeId::MeasuredScaled.to_string(), "M_ME_NB_1");
        assert_eq!(TypeId::MeasuredFloatTime56.to_string(), "M_ME_TF_1");
        assert_eq!(TypeId::InterrogationCommand.to_string(), "C_IC_NA_1");
        assert_eq!(TypeId::Uncataloged(34).to_string(), "TypeID(34)");
    }
}
