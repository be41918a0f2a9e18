//! Quality descriptor (QDS) for measured values.

/// Quality descriptor byte attached to measured values.
///
/// One opaque byte with named flag bits at the positions the standard
/// fixes. No value is rejected; reserved bits round-trip unchanged through
/// decode and encode.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct QualityDescriptor(u8);

// Wire bit positions
impl QualityDescriptor {
    const OV_MASK: u8 = 0x01;
    const BL_MASK: u8 = 0x10;
    const SB_MASK: u8 = 0x20;
    const NT_MASK: u8 = 0x40;
    const IV_MASK: u8 = 0x80;
}

impl QualityDescriptor {
    /// Good quality (all flags clear).
    pub const GOOD: Self = Self(0);

    /// Invalid quality (IV set, all else clear).
    pub const INVALID: Self = Self(Self::IV_MASK);

    /// Create from the raw wire byte.
    #[inline(always)]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The raw wire byte, returned unchanged.
    #[inline(always)]
    pub const fn encoded_value(&self) -> u8 {
        self.0
    }

    /// Overflow (OV) - value exceeds the predefined range
    #[inline(always)]
    pub const fn overflow(&self) -> bool {
        (self.0 & Self::OV_MASK) != 0
    }

    /// Set the overflow flag
    #[inline(always)]
    pub const fn set_overflow(mut self, value: bool) -> Self {
        if value {
            self.0 |= Self::OV_MASK;
        } else {
            self.0 &= !Self::OV_MASK;
        }
        self
    }

    /// Blocked (BL) - value is blocked for transmission
    #[inline(always)]
    pub const fn blocked(&self) -> bool {
        (self.0 & Self::BL_MASK) != 0
    }

    /// Set the blocked flag
    #[inline(always)]
    pub const fn set_blocked(mut self, value: bool) -> Self {
        if value {
            self.0 |= Self::BL_MASK;
        } else {
            self.0 &= !Self::BL_MASK;
        }
        self
    }

    /// Substituted (SB) - value was substituted by an operator or automatic source
    #[inline(always)]
    pub const fn substituted(&self) -> bool {
        (self.0 & Self::SB_MASK) != 0
    }

    /// Set the substituted flag
    #[inline(always)]
    pub const fn set_substituted(mut self, value: bool) -> Self {
        if value {
            self.0 |= Self::SB_MASK;
        } else {
            self.0 &= !Self::SB_MASK;
        }
        self
    }

    /// Not topical (NT) - value was not updated within the expected interval
    #[inline(always)]
    pub const fn not_topical(&self) -> bool {
        (self.0 & Self::NT_MASK) != 0
    }

    /// Set the not-topical flag
    #[inline(always)]
    pub const fn set_not_topical(mut self, value: bool) -> Self {
        if value {
            self.0 |= Self::NT_MASK;
        } else {
            self.0 &= !Self::NT_MASK;
        }
        self
    }

    /// Invalid (IV) - value is unusable
    #[inline(always)]
    pub const fn invalid(&self) -> bool {
        (self.0 & Self::IV_MASK) != 0
    }

    /// Set the invalid flag
    #[inline(always)]
    pub const fn set_invalid(mut self, value: bool) -> Self {
        if value {
            self.0 |= Self::IV_MASK;
        } else {
            self.0 &= !Self::IV_MASK;
        }
        self
    }

    /// Check if the quality is good (no flags set).
    #[inline(always)]
    pub const fn is_good(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for QualityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityDescriptor")
            .field("overflow", &self.overflow())
            .field("blocked", &self.blocked())
            .field("substituted", &self.substituted())
            .field("not_topical", &self.not_topical())
            .field("invalid", &self.invalid())
            .finish()
    }
}

impl std::fmt::Display for QualityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_good() {
            return f.write_str("Good");
        }

        let mut first = true;
        for (set, tag) in [
            (self.overflow(), "OV"),
            (self.blocked(), "BL"),
            (self.substituted(), "SB"),
            (self.not_topical(), "NT"),
            (self.invalid(), "IV"),
        ] {
            if set {
                if !first {
                    f.write_str("|")?;
                }
                first = false;
                f.write_str(tag)?;
            }
        }
        Ok(())
    }
}
