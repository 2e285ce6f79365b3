// nfcdose/src/prelude.rs

//! Commonly used types, for glob import.

pub use crate::clock::{Clock, ManualClock, TokioClock};
pub use crate::config::ReaderConfig;
pub use crate::dosage::{DeviceSnapshot, DosageReading, DoseUnit, DoseValue, ErrorFlags};
pub use crate::link::{MockTagLink, TagLink};
pub use crate::nonce::{FixedNonce, NonceSource, RandomNonce};
pub use crate::protocol::{FieldKind, NfcCommand};
pub use crate::reader::{DosimeterReader, ReaderBuilder};
pub use crate::{
    ByteOrder, DeviceId, Error, FixedPoint, MemoryAddress, RawDosageRecord, ReaderMode, Result,
    TrendSlot,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, page_dump};
