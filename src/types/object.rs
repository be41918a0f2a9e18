//! Information objects and their decode dispatch.
//!
//! Every information object owns its object address plus type-specific
//! payload fields and knows how to decode itself from a payload offset and
//! encode itself onto a frame. The per-type element layout is recorded in
//! [`DISPATCH_TABLE`]; supporting a new type means adding one variant, one
//! table entry and nothing else.

use bytes::{BufMut, BytesMut};

use crate::error::{Iec60870Error, Result};
use crate::params::ConnectionParameters;
use crate::types::{Cp56Time2a, QualityDescriptor, TypeId};

/// Information Object Address (IOA).
///
/// Encoded as 1-3 little-endian bytes depending on the connection's
/// configured IOA width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ioa(u32);

impl Ioa {
    /// Create an IOA from a value (lower 24 bits).
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// The raw address value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Parse an IOA from the payload at `offset`, reading the configured
    /// number of little-endian bytes.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let width = parameters.size_of_ioa();
        let bytes = payload
            .get(offset..offset + width)
            .ok_or_else(|| Iec60870Error::truncated(offset + width, payload.len()))?;

        let mut value = 0u32;
        for (i, byte) in bytes.iter().enumerate() {
            value |= (*byte as u32) << (8 * i);
        }
        Ok(Self(value))
    }

    /// Append the IOA as little-endian bytes of the configured width.
    ///
    /// Fails if the address does not fit in that width.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        let width = parameters.size_of_ioa();
        if width < 3 && self.0 >= 1u32 << (8 * width) {
            return Err(Iec60870Error::value_out_of_range(format!(
                "IOA {} does not fit in {width} byte(s)",
                self.0
            )));
        }
        for i in 0..width {
            frame.put_u8((self.0 >> (8 * i)) as u8);
        }
        Ok(())
    }
}

impl std::fmt::Display for Ioa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode a scaled value from its unsigned little-endian byte pair.
///
/// The wire carries an unsigned 16-bit value; readings above 32767 are the
/// two's complement of a negative value. This is the canonical rule for
/// every signed numeric field in the standard, at its own bit width.
#[inline(always)]
pub(crate) const fn scaled_from_le(lo: u8, hi: u8) -> i16 {
    u16::from_le_bytes([lo, hi]) as i16
}

/// Encode a scaled value as its unsigned little-endian byte pair.
#[inline(always)]
pub(crate) const fn scaled_to_le(value: i16) -> [u8; 2] {
    (value as u16).to_le_bytes()
}

/// Single-point information (M_SP_NA_1).
///
/// The SIQ byte packs the status bit with the quality flags; bits 1-3 of
/// the quality nibble are reserved and dropped on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinglePointInformation {
    /// Object address
    pub address: Ioa,
    /// Status (ON/OFF)
    pub value: bool,
    /// Quality flags from the SIQ byte
    pub quality: QualityDescriptor,
}

impl SinglePointInformation {
    /// Create a new single-point information object.
    pub const fn new(address: Ioa, value: bool, quality: QualityDescriptor) -> Self {
        Self {
            address,
            value,
            quality,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let address = Ioa::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa();
        let siq = *payload
            .get(pos)
            .ok_or_else(|| Iec60870Error::truncated(pos + 1, payload.len()))?;

        Ok(Self {
            address,
            value: (siq & 0x01) != 0,
            quality: QualityDescriptor::from_byte(siq & 0xF0),
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        self.address.encode(frame, parameters)?;
        frame.put_u8(self.siq());
        Ok(())
    }

    #[inline]
    fn siq(&self) -> u8 {
        (self.quality.encoded_value() & 0xF0) | u8::from(self.value)
    }
}

/// Single-point information with time tag CP56Time2a (M_SP_TB_1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinglePointWithCp56Time2a {
    /// Object address
    pub address: Ioa,
    /// Status (ON/OFF)
    pub value: bool,
    /// Quality flags from the SIQ byte
    pub quality: QualityDescriptor,
    /// Time of the status change
    pub timestamp: Cp56Time2a,
}

impl SinglePointWithCp56Time2a {
    /// Create a new time-tagged single-point object.
    pub const fn new(
        address: Ioa,
        value: bool,
        quality: QualityDescriptor,
        timestamp: Cp56Time2a,
    ) -> Self {
        Self {
            address,
            value,
            quality,
            timestamp,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let point = SinglePointInformation::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa() + 1;
        let tail = payload
            .get(pos..pos + Cp56Time2a::ENCODED_LEN)
            .ok_or_else(|| {
                Iec60870Error::truncated(pos + Cp56Time2a::ENCODED_LEN, payload.len())
            })?;

        Ok(Self {
            address: point.address,
            value: point.value,
            quality: point.quality,
            timestamp: Cp56Time2a::from_bytes(tail)?,
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        SinglePointInformation::new(self.address, self.value, self.quality)
            .encode(frame, parameters)?;
        frame.put_slice(&self.timestamp.to_bytes());
        Ok(())
    }
}

/// Measured value, scaled (M_ME_NB_1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredValueScaled {
    /// Object address
    pub address: Ioa,
    /// Scaled value (-32768..=32767)
    pub value: i16,
    /// Quality descriptor
    pub quality: QualityDescriptor,
}

impl MeasuredValueScaled {
    /// Create a new scaled measured value.
    pub const fn new(address: Ioa, value: i16, quality: QualityDescriptor) -> Self {
        Self {
            address,
            value,
            quality,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let address = Ioa::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa();
        let tail = payload
            .get(pos..pos + 3)
            .ok_or_else(|| Iec60870Error::truncated(pos + 3, payload.len()))?;

        Ok(Self {
            address,
            value: scaled_from_le(tail[0], tail[1]),
            quality: QualityDescriptor::from_byte(tail[2]),
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        self.address.encode(frame, parameters)?;
        frame.put_slice(&scaled_to_le(self.value));
        frame.put_u8(self.quality.encoded_value());
        Ok(())
    }
}

/// Measured value, scaled with time tag CP56Time2a (M_ME_TE_1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredValueScaledWithCp56Time2a {
    /// Object address
    pub address: Ioa,
    /// Scaled value (-32768..=32767)
    pub value: i16,
    /// Quality descriptor
    pub quality: QualityDescriptor,
    /// Time of the measurement
    pub timestamp: Cp56Time2a,
}

impl MeasuredValueScaledWithCp56Time2a {
    /// Create a new time-tagged scaled measured value.
    pub const fn new(
        address: Ioa,
        value: i16,
        quality: QualityDescriptor,
        timestamp: Cp56Time2a,
    ) -> Self {
        Self {
            address,
            value,
            quality,
            timestamp,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let scaled = MeasuredValueScaled::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa() + 3;
        let tail = payload
            .get(pos..pos + Cp56Time2a::ENCODED_LEN)
            .ok_or_else(|| {
                Iec60870Error::truncated(pos + Cp56Time2a::ENCODED_LEN, payload.len())
            })?;

        Ok(Self {
            address: scaled.address,
            value: scaled.value,
            quality: scaled.quality,
            timestamp: Cp56Time2a::from_bytes(tail)?,
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        MeasuredValueScaled::new(self.address, self.value, self.quality)
            .encode(frame, parameters)?;
        frame.put_slice(&self.timestamp.to_bytes());
        Ok(())
    }
}

/// Measured value, short floating point (M_ME_NC_1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredValueShortFloat {
    /// Object address
    pub address: Ioa,
    /// IEEE 754 single-precision value
    pub value: f32,
    /// Quality descriptor
    pub quality: QualityDescriptor,
}

impl MeasuredValueShortFloat {
    /// Create a new short-float measured value.
    pub const fn new(address: Ioa, value: f32, quality: QualityDescriptor) -> Self {
        Self {
            address,
            value,
            quality,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let address = Ioa::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa();
        let tail = payload
            .get(pos..pos + 5)
            .ok_or_else(|| Iec60870Error::truncated(pos + 5, payload.len()))?;

        Ok(Self {
            address,
            value: f32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]),
            quality: QualityDescriptor::from_byte(tail[4]),
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        self.address.encode(frame, parameters)?;
        frame.put_f32_le(self.value);
        frame.put_u8(self.quality.encoded_value());
        Ok(())
    }
}

/// Measured value, short floating point with time tag CP56Time2a (M_ME_TF_1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredValueShortFloatWithCp56Time2a {
    /// Object address
    pub address: Ioa,
    /// IEEE 754 single-precision value
    pub value: f32,
    /// Quality descriptor
    pub quality: QualityDescriptor,
    /// Time of the measurement
    pub timestamp: Cp56Time2a,
}

impl MeasuredValueShortFloatWithCp56Time2a {
    /// Create a new time-tagged short-float measured value.
    pub const fn new(
        address: Ioa,
        value: f32,
        quality: QualityDescriptor,
        timestamp: Cp56Time2a,
    ) -> Self {
        Self {
            address,
            value,
            quality,
            timestamp,
        }
    }

    /// Decode from the payload at `offset`.
    pub fn decode(
        parameters: &ConnectionParameters,
        payload: &[u8],
        offset: usize,
    ) -> Result<Self> {
        let float = MeasuredValueShortFloat::decode(parameters, payload, offset)?;
        let pos = offset + parameters.size_of_ioa() + 5;
        let tail = payload
            .get(pos..pos + Cp56Time2a::ENCODED_LEN)
            .ok_or_else(|| {
                Iec60870Error::truncated(pos + Cp56Time2a::ENCODED_LEN, payload.len())
            })?;

        Ok(Self {
            address: float.address,
            value: float.value,
            quality: float.quality,
            timestamp: Cp56Time2a::from_bytes(tail)?,
        })
    }

    /// Append the object's encoding to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        MeasuredValueShortFloat::new(self.address, self.value, self.quality)
            .encode(frame, parameters)?;
        frame.put_slice(&self.timestamp.to_bytes());
        Ok(())
    }
}

/// An information object of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum InformationObject {
    /// Single-point information (M_SP_NA_1)
    SinglePoint(SinglePointInformation),
    /// Single-point information with time tag (M_SP_TB_1)
    SinglePointTime56(SinglePointWithCp56Time2a),
    /// Measured value, scaled (M_ME_NB_1)
    MeasuredScaled(MeasuredValueScaled),
    /// Measured value, scaled with time tag (M_ME_TE_1)
    MeasuredScaledTime56(MeasuredValueScaledWithCp56Time2a),
    /// Measured value, short floating point (M_ME_NC_1)
    MeasuredFloat(MeasuredValueShortFloat),
    /// Measured value, short floating point with time tag (M_ME_TF_1)
    MeasuredFloatTime56(MeasuredValueShortFloatWithCp56Time2a),
}

impl InformationObject {
    /// The type identifier this object encodes as.
    pub const fn type_id(&self) -> TypeId {
        match self {
            Self::SinglePoint(_) => TypeId::SinglePoint,
            Self::SinglePointTime56(_) => TypeId::SinglePointTime56,
            Self::MeasuredScaled(_) => TypeId::MeasuredScaled,
            Self::MeasuredScaledTime56(_) => TypeId::MeasuredScaledTime56,
            Self::MeasuredFloat(_) => TypeId::MeasuredFloat,
            Self::MeasuredFloatTime56(_) => TypeId::MeasuredFloatTime56,
        }
    }

    /// The object address.
    pub const fn address(&self) -> Ioa {
        match self {
            Self::SinglePoint(obj) => obj.address,
            Self::SinglePointTime56(obj) => obj.address,
            Self::MeasuredScaled(obj) => obj.address,
            Self::MeasuredScaledTime56(obj) => obj.address,
            Self::MeasuredFloat(obj) => obj.address,
            Self::MeasuredFloatTime56(obj) => obj.address,
        }
    }

    /// Append the object's encoding (address followed by payload) to the frame.
    pub fn encode(&self, frame: &mut BytesMut, parameters: &ConnectionParameters) -> Result<()> {
        match self {
            Self::SinglePoint(obj) => obj.encode(frame, parameters),
            Self::SinglePointTime56(obj) => obj.encode(frame, parameters),
            Self::MeasuredScaled(obj) => obj.encode(frame, parameters),
            Self::MeasuredScaledTime56(obj) => obj.encode(frame, parameters),
            Self::MeasuredFloat(obj) => obj.encode(frame, parameters),
            Self::MeasuredFloatTime56(obj) => obj.encode(frame, parameters),
        }
    }

    /// Length in bytes this object encodes to under the given widths.
    pub fn encoded_len(&self, parameters: &ConnectionParameters) -> usize {
        let tail = match self {
            Self::SinglePoint(_) => 1,
            Self::SinglePointTime56(_) => 1 + Cp56Time2a::ENCODED_LEN,
            Self::MeasuredScaled(_) => 3,
            Self::MeasuredScaledTime56(_) => 3 + Cp56Time2a::ENCODED_LEN,
            Self::MeasuredFloat(_) => 5,
            Self::MeasuredFloatTime56(_) => 5 + Cp56Time2a::ENCODED_LEN,
        };
        parameters.size_of_ioa() + tail
    }
}

/// One row of the decode dispatch table.
pub(crate) struct DispatchEntry {
    pub(crate) type_id: TypeId,
    /// Element bytes after the object address
    pub(crate) tail_len: usize,
    pub(crate) decode: fn(&ConnectionParameters, &[u8], usize) -> Result<InformationObject>,
}

impl DispatchEntry {
    /// Element stride for the given connection widths.
    #[inline]
    pub(crate) fn stride(&self, parameters: &ConnectionParameters) -> usize {
        parameters.size_of_ioa() + self.tail_len
    }
}

fn decode_single_point(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    SinglePointInformation::decode(parameters, payload, offset).map(InformationObject::SinglePoint)
}

fn decode_single_point_time56(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    SinglePointWithCp56Time2a::decode(parameters, payload, offset)
        .map(InformationObject::SinglePointTime56)
}

fn decode_measured_scaled(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    MeasuredValueScaled::decode(parameters, payload, offset).map(InformationObject::MeasuredScaled)
}

fn decode_measured_scaled_time56(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    MeasuredValueScaledWithCp56Time2a::decode(parameters, payload, offset)
        .map(InformationObject::MeasuredScaledTime56)
}

fn decode_measured_float(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    MeasuredValueShortFloat::decode(parameters, payload, offset)
        .map(InformationObject::MeasuredFloat)
}

fn decode_measured_float_time56(
    parameters: &ConnectionParameters,
    payload: &[u8],
    offset: usize,
) -> Result<InformationObject> {
    MeasuredValueShortFloatWithCp56Time2a::decode(parameters, payload, offset)
        .map(InformationObject::MeasuredFloatTime56)
}

/// Per-type element layout and decode constructors.
///
/// Extension point for new information object types: add the variant, its
/// struct and one entry here. The envelope logic never changes.
static DISPATCH_TABLE: &[DispatchEntry] = &[
    DispatchEntry {
        type_id: TypeId::SinglePoint,
        tail_len: 1,
        decode: decode_single_point,
    },
    DispatchEntry {
        type_id: TypeId::SinglePointTime56,
        tail_len: 1 + Cp56Time2a::ENCODED_LEN,
        decode: decode_single_point_time56,
    },
    DispatchEntry {
        type_id: TypeId::MeasuredScaled,
        tail_len: 3,
        decode: decode_measured_scaled,
    },
    DispatchEntry {
        type_id: TypeId::MeasuredScaledTime56,
        tail_len: 3 + Cp56Time2a::ENCODED_LEN,
        decode: decode_measured_scaled_time56,
    },
    DispatchEntry {
        type_id: TypeId::MeasuredFloat,
        tail_len: 5,
        decode: decode_measured_float,
    },
    DispatchEntry {
        type_id: TypeId::MeasuredFloatTime56,
        tail_len: 5 + Cp56Time2a::ENCODED_LEN,
        decode: decode_measured_float_time56,
    },
];

/// Look up the dispatch entry for a type identifier.
pub(crate) fn dispatch_entry(type_id: TypeId) -> Result<&'static DispatchEntry> {
    DISPATCH_TABLE
        .iter()
        .find(|entry| entry.type_id == type_id)
        .ok_or(Iec60870Error::UnknownTypeId(type_id.as_u8()))
}

/// Element stride (bytes per element) for a type under the given widths.
pub fn element_stride(type_id: TypeId, parameters: &ConnectionParameters) -> Result<usize> {
    dispatch_entry(type_id).map(|entry| entry.stride(parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ioa: u8) -> ConnectionParameters {
        ConnectionParameters::new(2, 2, ioa).unwrap()
    }

    #[test]
    fn test_ioa_decode_widths() {
        let payload = [0x56, 0x34, 0x12];
        assert_eq!(
            Ioa::decode(&params(1), &payload, 0).unwrap().value(),
            0x56
        );
        assert_eq!(
            Ioa::decode(&params(2), &payload, 0).unwrap().value(),
            0x3456
        );
        assert_eq!(
            Ioa::decode(&params(3), &payload, 0).unwrap().value(),
            0x123456
        );
    }

    #[test]
    fn test_ioa_decode_truncated() {
        let err = Ioa::decode(&params(3), &[0x01, 0x02], 0).unwrap_err();
        assert!(matches!(err, Iec60870Error::TruncatedFrame { .. }));
    }

    #[test]
    fn test_ioa_encode_width_check() {
        let mut frame = BytesMut::new();
        Ioa::new(0x123456).encode(&mut frame, &params(3)).unwrap();
        assert_eq!(&frame[..], &[0x56, 0x34, 0x12]);

        let mut frame = BytesMut::new();
        assert!(Ioa::new(300).encode(&mut frame, &params(1)).is_err());
        assert!(Ioa::new(255).encode(&mut frame, &params(1)).is_ok());
        assert!(Ioa::new(0x10000).encode(&mut frame, &params(2)).is_err());
    }

    #[test]
    fn test_scaled_sign_roundtrip_full_domain() {
        for value in i16::MIN..=i16::MAX {
            let [lo, hi] = scaled_to_le(value);
            let decoded = scaled_from_le(lo, hi);
            assert_eq!(decoded, value);
            assert_eq!(decoded.is_negative(), value.is_negative());
        }
    }

    #[test]
    fn test_scaled_known_encodings() {
        assert_eq!(scaled_to_le(-1), [0xFF, 0xFF]);
        assert_eq!(scaled_to_le(32767), [0xFF, 0x7F]);
        assert_eq!(scaled_to_le(-32768), [0x00, 0x80]);
        assert_eq!(scaled_from_le(0xFF, 0xFF), -1);
        assert_eq!(scaled_from_le(0xFF, 0x7F), 32767);
        assert_eq!(scaled_from_le(0x00, 0x80), -32768);
    }

    #[test]
    fn test_measured_value_scaled_roundtrip() {
        let parameters = params(3);
        let original = MeasuredValueScaled::new(
            Ioa::new(4000),
            -1234,
            QualityDescriptor::GOOD.set_not_topical(true),
        );

        let mut frame = BytesMut::new();
        original.encode(&mut frame, &parameters).unwrap();
        assert_eq!(frame.len(), 6); // 3 IOA + 2 value + 1 QDS

        let decoded = MeasuredValueScaled::decode(&parameters, &frame, 0).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_measured_value_scaled_wire_layout() {
        let parameters = params(1);
        let object = MeasuredValueScaled::new(Ioa::new(7), -1, QualityDescriptor::GOOD);

        let mut frame = BytesMut::new();
        object.encode(&mut frame, &parameters).unwrap();
        assert_eq!(&frame[..], &[0x07, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_single_point_siq_packing() {
        let parameters = params(2);
        // SIQ 0x81: invalid + ON
        let payload = [0xE9, 0x03, 0x81];
        let point = SinglePointInformation::decode(&parameters, &payload, 0).unwrap();
        assert_eq!(point.address.value(), 1001);
        assert!(point.value);
        assert!(point.quality.invalid());
        assert!(!point.quality.blocked());

        let mut frame = BytesMut::new();
        point.encode(&mut frame, &parameters).unwrap();
        assert_eq!(&frame[..], &payload);
    }

    #[test]
    fn test_short_float_roundtrip() {
        let parameters = params(3);
        let original = MeasuredValueShortFloat::new(
            Ioa::new(3000),
            23.5,
            QualityDescriptor::GOOD.set_overflow(true),
        );

        let mut frame = BytesMut::new();
        original.encode(&mut frame, &parameters).unwrap();

        let decoded = MeasuredValueShortFloat::decode(&parameters, &frame, 0).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_time_tagged_scaled_roundtrip() {
        let parameters = params(2);
        let timestamp = Cp56Time2a {
            milliseconds: 30000,
            minutes: 30,
            hours: 12,
            day: 15,
            day_of_week: 3,
            month: 6,
            year: 24,
            invalid: false,
            summer_time: true,
        };
        let original = MeasuredValueScaledWithCp56Time2a::new(
            Ioa::new(500),
            -32768,
            QualityDescriptor::INVALID,
            timestamp,
        );

        let mut frame = BytesMut::new();
        original.encode(&mut frame, &parameters).unwrap();
        assert_eq!(frame.len(), 2 + 3 + 7);

        let decoded =
            MeasuredValueScaledWithCp56Time2a::decode(&parameters, &frame, 0).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_dispatch_strides() {
        let parameters = params(3);
        let cases = [
            (TypeId::SinglePoint, 4),
            (TypeId::SinglePointTime56, 11),
            (TypeId::MeasuredScaled, 6),
            (TypeId::MeasuredScaledTime56, 13),
            (TypeId::MeasuredFloat, 8),
            (TypeId::MeasuredFloatTime56, 15),
        ];
        for (type_id, expected) in cases {
            assert_eq!(element_stride(type_id, &parameters).unwrap(), expected);
        }

        // Narrow IOA shrinks every stride by the same amount
        let narrow = params(1);
        assert_eq!(element_stride(TypeId::MeasuredScaled, &narrow).unwrap(), 4);
    }

    #[test]
    fn test_dispatch_unknown_type() {
        let err = element_stride(TypeId::InterrogationCommand, &params(3)).unwrap_err();
        assert!(matches!(err, Iec60870Error::UnknownTypeId(100)));
    }

    #[test]
    fn test_decode_truncated_element() {
        let parameters = params(3);
        // 3 IOA bytes + only 2 of the 3 payload bytes
        let payload = [0x01, 0x00, 0x00, 0xE8, 0x03];
        let err = MeasuredValueScaled::decode(&parameters, &payload, 0).unwrap_err();
        assert!(matches!(err, Iec60870Error::TruncatedFrame { .. }));
    }
}
