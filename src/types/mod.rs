//! IEC 60870-5 application-layer type definitions.
//!
//! This module contains the core protocol types:
//!
//! - `TypeId` - Type identification (M_ME_NB_1, etc.)
//! - `Cot` - Cause of transmission
//! - `QualityDescriptor` - Quality flags of measured values
//! - `Cp56Time2a` - 7-byte absolute time tag
//! - `InformationObject` - The information object family
//! - `Asdu` - Application Service Data Unit envelope

mod asdu;
mod cot;
pub(crate) mod object;
mod quality;
mod time;
mod type_id;

pub use asdu::{Asdu, AsduBody, Vsq};
pub use cot::Cot;
pub use object::{
    element_stride, InformationObject, Ioa, MeasuredValueScaled,
    MeasuredValueScaledWithCp56Time2a, MeasuredValueShortFloat,
    MeasuredValueShortFloatWithCp56Time2a, SinglePointInformation, SinglePointWithCp56Time2a,
};
pub use quality::QualityDescriptor;
pub use time::Cp56Time2a;
pub use type_id::TypeId;
