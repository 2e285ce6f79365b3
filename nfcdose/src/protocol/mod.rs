// nfcdose/src/protocol/mod.rs

//! Wire protocol: NFC-A commands, session registers and MCU frames.

pub mod checksum;
pub mod commands;
pub mod field;
pub mod frame;
pub mod parser;
pub mod session;
pub mod status;

pub use checksum::crc32_mpeg2;
pub use commands::NfcCommand;
pub use field::{FieldKind, FieldLayout};
pub use frame::{CommandFrame, CrcReport, ResponseFrame, build_common_block};
pub use session::{Handshake, SessionRegisterStatus};
pub use status::{StatusCode, StatusType};
