//! IEC 60870-5 ASDU (Application Service Data Unit) envelope.
//!
//! An ASDU is either decoded from a received frame, in which case its
//! payload is kept opaque and elements are materialized lazily by index,
//! or built empty by a sender and populated object by object before a
//! single encode call. The two origins never mix; [`AsduBody`] makes the
//! distinction a type-level fact.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Iec60870Error, Result};
use crate::params::ConnectionParameters;
use crate::types::object::dispatch_entry;
use crate::types::{Cot, InformationObject, TypeId};

/// Offset of the ASDU within a received frame, past the transport header.
const ASDU_OFFSET: usize = 6;

/// Variable Structure Qualifier (VSQ).
///
/// Packs the element count (bits 0-6, at most 127) with the
/// sequence-addressing flag (bit 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vsq {
    count: u8,
    sequence: bool,
}

impl Vsq {
    /// Create a VSQ, rejecting counts above 127.
    pub fn new(count: u8, sequence: bool) -> Result<Self> {
        if count > 0x7F {
            return Err(Iec60870Error::value_out_of_range(format!(
                "element count must be <= 127, got {count}"
            )));
        }
        Ok(Self { count, sequence })
    }

    /// Parse a VSQ from the wire byte.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            count: byte & 0x7F,
            sequence: (byte & 0x80) != 0,
        }
    }

    /// Encode the VSQ to its wire byte.
    #[inline]
    pub const fn as_byte(&self) -> u8 {
        self.count | if self.sequence { 0x80 } else { 0 }
    }

    /// Number of information objects (0-127).
    #[inline]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Whether the elements are sequence-addressed (SQ=1).
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        self.sequence
    }
}

/// The body of an ASDU: exactly one of the two representations.
#[derive(Debug, Clone, PartialEq)]
pub enum AsduBody {
    /// Opaque payload captured at decode time, owned by the envelope.
    Raw(Bytes),
    /// Information objects accumulated by a sender, in append order.
    Objects(Vec<InformationObject>),
}

/// A complete ASDU envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Asdu {
    parameters: ConnectionParameters,
    type_id: TypeId,
    vsq: Vsq,
    cot: Cot,
    test: bool,
    negative: bool,
    originator: u8,
    common_address: u16,
    body: AsduBody,
}

impl Asdu {
    /// Create an empty ASDU to be populated with [`add_object`](Self::add_object).
    pub fn new(
        parameters: ConnectionParameters,
        type_id: TypeId,
        cot: Cot,
        common_address: u16,
    ) -> Self {
        Self {
            parameters,
            type_id,
            vsq: Vsq {
                count: 0,
                sequence: false,
            },
            cot,
            test: false,
            negative: false,
            originator: 0,
            common_address,
            body: AsduBody::Objects(Vec::new()),
        }
    }

    /// Mark the ASDU as sequence-addressed (SQ=1).
    pub fn with_sequence(mut self) -> Self {
        self.vsq.sequence = true;
        self
    }

    /// Set the test flag.
    pub fn with_test(mut self) -> Self {
        self.test = true;
        self
    }

    /// Set the negative confirmation flag.
    pub fn with_negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Set the originator address (meaningful only with a 2-byte COT).
    pub fn with_originator(mut self, originator: u8) -> Self {
        self.originator = originator;
        self
    }

    /// Parse an ASDU from a received frame.
    ///
    /// `msg` is the complete frame; the ASDU starts at the fixed 6-byte
    /// transport header offset. The remainder after the envelope header is
    /// copied into the ASDU, so the returned value does not borrow from
    /// `msg`.
    ///
    /// Accepts every type byte; the only parse failure is a buffer shorter
    /// than the header widths require. Envelopes of uncataloged or
    /// undecodable types can still be inspected and re-encoded verbatim,
    /// they just fail [`get_element`](Self::get_element).
    pub fn parse(parameters: ConnectionParameters, msg: &[u8]) -> Result<Self> {
        let min_len = ASDU_OFFSET + parameters.asdu_header_len();
        if msg.len() < min_len {
            return Err(Iec60870Error::truncated(min_len, msg.len()));
        }

        let mut pos = ASDU_OFFSET;

        let type_id = TypeId::from_byte(msg[pos]);
        pos += 1;

        let vsq = Vsq::from_byte(msg[pos]);
        pos += 1;

        let cot_byte = msg[pos];
        pos += 1;
        let test = (cot_byte & 0x80) != 0;
        let negative = (cot_byte & 0x40) != 0;
        let cot = Cot::from_byte(cot_byte);

        let originator = if parameters.size_of_cot() == 2 {
            let oa = msg[pos];
            pos += 1;
            oa
        } else {
            0
        };

        let mut common_address = msg[pos] as u16;
        pos += 1;
        if parameters.size_of_ca() > 1 {
            common_address |= (msg[pos] as u16) << 8;
            pos += 1;
        }

        Ok(Self {
            parameters,
            type_id,
            vsq,
            cot,
            test,
            negative,
            originator,
            common_address,
            body: AsduBody::Raw(Bytes::copy_from_slice(&msg[pos..])),
        })
    }

    /// Append an information object, updating the element count.
    ///
    /// Fails once the count would exceed 127, and on ASDUs decoded from
    /// the wire (their body is an opaque payload, not an object list).
    pub fn add_object(&mut self, object: InformationObject) -> Result<()> {
        let objects = match &mut self.body {
            AsduBody::Objects(objects) => objects,
            AsduBody::Raw(_) => {
                return Err(Iec60870Error::invalid_asdu(
                    "cannot append objects to an ASDU decoded from the wire",
                ))
            }
        };

        if self.vsq.count >= 0x7F {
            return Err(Iec60870Error::value_out_of_range(
                "element count exceeds 127",
            ));
        }

        objects.push(object);
        self.vsq.count += 1;
        Ok(())
    }

    /// Encode the ASDU, appending to the caller's frame buffer.
    ///
    /// A decoded ASDU re-emits its payload verbatim (pass-through for
    /// unmodified re-transmission); a built ASDU encodes each object in
    /// append order.
    pub fn encode(&self, frame: &mut BytesMut) -> Result<()> {
        frame.put_u8(self.type_id.as_u8());
        frame.put_u8(self.vsq.as_byte());

        let mut cot_byte = self.cot.value();
        if self.test {
            cot_byte |= 0x80;
        }
        if self.negative {
            cot_byte |= 0x40;
        }
        frame.put_u8(cot_byte);

        if self.parameters.size_of_cot() == 2 {
            frame.put_u8(self.originator);
        }

        if self.parameters.size_of_ca() == 1 && self.common_address > 0xFF {
            return Err(Iec60870Error::value_out_of_range(format!(
                "common address {} does not fit in 1 byte",
                self.common_address
            )));
        }
        frame.put_u8((self.common_address & 0xFF) as u8);
        if self.parameters.size_of_ca() > 1 {
            frame.put_u8((self.common_address >> 8) as u8);
        }

        match &self.body {
            AsduBody::Raw(payload) => frame.put_slice(payload),
            AsduBody::Objects(objects) => {
                for object in objects {
                    object.encode(frame, &self.parameters)?;
                }
            }
        }

        Ok(())
    }

    /// Materialize the information object at `index`.
    ///
    /// On a decoded ASDU this decodes from the opaque payload at
    /// `index * stride` through the dispatch table, fresh on every call.
    /// Indices past what the payload holds fail; so do type identifiers
    /// without a dispatch entry.
    pub fn get_element(&self, index: usize) -> Result<InformationObject> {
        match &self.body {
            AsduBody::Objects(objects) => {
                objects
                    .get(index)
                    .cloned()
                    .ok_or(Iec60870Error::ElementOutOfRange {
                        index,
                        count: objects.len(),
                    })
            }
            AsduBody::Raw(payload) => {
                let entry = dispatch_entry(self.type_id)?;
                let stride = entry.stride(&self.parameters);
                // index < count keeps index * stride within payload.len()
                let count = payload.len() / stride;
                if index >= count {
                    return Err(Iec60870Error::ElementOutOfRange { index, count });
                }
                (entry.decode)(&self.parameters, payload, index * stride)
            }
        }
    }

    /// Length in bytes this ASDU encodes to.
    pub fn encoded_len(&self) -> usize {
        let body_len = match &self.body {
            AsduBody::Raw(payload) => payload.len(),
            AsduBody::Objects(objects) => objects
                .iter()
                .map(|object| object.encoded_len(&self.parameters))
                .sum(),
        };
        self.parameters.asdu_header_len() + body_len
    }

    /// The type identifier.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The cause of transmission.
    #[inline]
    pub const fn cot(&self) -> Cot {
        self.cot
    }

    /// Change the cause of transmission (e.g. activation to confirmation).
    #[inline]
    pub fn set_cot(&mut self, cot: Cot) {
        self.cot = cot;
    }

    /// The test flag.
    #[inline]
    pub const fn is_test(&self) -> bool {
        self.test
    }

    /// The negative confirmation flag.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Mark or clear the negative confirmation flag.
    #[inline]
    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    /// The originator address (0 when unused).
    #[inline]
    pub const fn originator(&self) -> u8 {
        self.originator
    }

    /// The common address.
    #[inline]
    pub const fn common_address(&self) -> u16 {
        self.common_address
    }

    /// Number of information objects in the envelope.
    #[inline]
    pub const fn number_of_elements(&self) -> usize {
        self.vsq.count() as usize
    }

    /// Whether the elements are sequence-addressed (SQ=1).
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        self.vsq.is_sequence()
    }

    /// The connection parameters this ASDU was built or decoded with.
    #[inline]
    pub const fn parameters(&self) -> &ConnectionParameters {
        &self.parameters
    }

    /// The envelope body.
    #[inline]
    pub const fn body(&self) -> &AsduBody {
        &self.body
    }
}

impl std::fmt::Display for Asdu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeID: {} COT: {}", self.type_id, self.cot)?;
        if self.parameters.size_of_cot() == 2 {
            write!(f, " OA: {}", self.originator)?;
        }
        if self.test {
            f.write_str(" [TEST]")?;
        }
        if self.negative {
            f.write_str(" [NEG]")?;
        }
        if self.is_sequence() {
            f.write_str(" [SEQ]")?;
        }
        write!(
            f,
            " elements: {} CA: {}",
            self.number_of_elements(),
            self.common_address
        )
    }
}
