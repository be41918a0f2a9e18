//! # iec60870-asdu
//!
//! IEC 60870-5 application-layer (ASDU) codec for Rust.
//!
//! This crate converts between the fixed, configurable-width binary wire
//! format of the IEC 60870-5 telecontrol family and an in-memory structured
//! representation of monitoring data exchanged between a controlling and a
//! controlled station. It performs no I/O: a transport layer hands it raw
//! byte buffers and receives serialized bytes in return.
//!
//! ## Features
//!
//! - **Configurable field widths**: COT, common address and object address
//!   sizes are negotiated per connection, not fixed
//! - **Lazy element decode**: received payloads stay opaque until an
//!   element is requested by index
//! - **Open type catalog**: new information object types are added to the
//!   dispatch table without touching the envelope logic
//! - **Type safe**: strong typing for TypeID, COT, IOA and quality flags
//!
//! ## Quick Start
//!
//! ```rust
//! use bytes::BytesMut;
//! use iec60870_asdu::{
//!     Asdu, ConnectionParameters, Cot, InformationObject, Ioa, MeasuredValueScaled,
//!     QualityDescriptor, TypeId,
//! };
//!
//! fn main() -> iec60870_asdu::Result<()> {
//!     let parameters = ConnectionParameters::default();
//!
//!     // Build an ASDU and encode it
//!     let mut asdu = Asdu::new(parameters, TypeId::MeasuredScaled, Cot::SPONTANEOUS, 1);
//!     asdu.add_object(InformationObject::MeasuredScaled(MeasuredValueScaled::new(
//!         Ioa::new(1001),
//!         -42,
//!         QualityDescriptor::GOOD,
//!     )))?;
//!
//!     let mut frame = BytesMut::new();
//!     asdu.encode(&mut frame)?;
//!
//!     // Decode a received frame (6-byte transport header + ASDU)
//!     let mut msg = vec![0u8; 6];
//!     msg.extend_from_slice(&frame);
//!     let received = Asdu::parse(parameters, &msg)?;
//!     let element = received.get_element(0)?;
//!     assert_eq!(element.address().value(), 1001);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Wire layout
//!
//! ASDU envelope, after the 6-byte transport header:
//!
//! ```text
//! +---------+---------+---------+---------+---------+----------------+
//! | TypeID  | VSQ     | COT     | OA?     | CA (1-2)| objects...     |
//! | 1 byte  | 1 byte  | 1 byte  | 0-1 byte| LE      | per dispatch   |
//! +---------+---------+---------+---------+---------+----------------+
//! ```
//!
//! VSQ packs the element count (bits 0-6) with the sequence flag (bit 7);
//! the COT byte packs the cause (bits 0-5) with the negative (bit 6) and
//! test (bit 7) flags. The originator address byte is present only when
//! the connection uses a 2-byte COT.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod params;
pub mod types;

// Re-export main types
pub use error::{Iec60870Error, Result};
pub use params::ConnectionParameters;
pub use types::*;
