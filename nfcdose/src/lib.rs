// nfcdose/src/lib.rs

//! nfcdose
//!
//! Pure Rust protocol engine for reading radiation dosimeters over NFC-A.
//! Records are read either from the dosimeter's own memory, relayed by its
//! microcontroller through the tag's SRAM pass-through window, or from the
//! tag's NFC memory sectors.
#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod constants;
pub mod dosage;
pub mod engine;
pub mod error;
pub mod link;
pub mod nonce;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
