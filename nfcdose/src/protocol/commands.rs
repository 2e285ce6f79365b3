// nfcdose/src/protocol/commands.rs

//! NFC-A tag commands.

use crate::constants::{
    NFC_FAST_READ, NFC_FAST_WRITE, NFC_READ, NFC_SECTOR_SELECT, SECTOR_SELECT_PARAM,
    SESSION_REGISTER_PAGE, SRAM_END_PAGE, SRAM_LEN, SRAM_START_PAGE,
};

/// Raw NFC-A commands sent over the tag link. New commands should be added
/// here together with their encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfcCommand {
    /// READ: four pages starting at `page`.
    Read {
        /// First page
        page: u8,
    },
    /// FAST_READ of the page range `start..=end`.
    FastRead {
        /// First page
        start: u8,
        /// Last page, inclusive
        end: u8,
    },
    /// FAST_WRITE of `data` to the page range `start..=end`.
    FastWrite {
        /// First page
        start: u8,
        /// Last page, inclusive
        end: u8,
        /// Bytes covering the whole page range
        data: Vec<u8>,
    },
    /// SECTOR_SELECT packet 1.
    SectorSelect,
    /// SECTOR_SELECT packet 2: the target sector.
    SectorSelectTarget {
        /// Sector number
        sector: u8,
    },
}

impl NfcCommand {
    /// Read of the session registers (NC_REG / NS_REG).
    pub fn session_register() -> Self {
        Self::Read {
            page: SESSION_REGISTER_PAGE,
        }
    }

    /// FAST_WRITE of a full SRAM block.
    pub fn sram_write(block: [u8; SRAM_LEN]) -> Self {
        Self::FastWrite {
            start: SRAM_START_PAGE,
            end: SRAM_END_PAGE,
            data: block.to_vec(),
        }
    }

    /// FAST_READ of the full SRAM window.
    pub fn sram_read() -> Self {
        Self::FastRead {
            start: SRAM_START_PAGE,
            end: SRAM_END_PAGE,
        }
    }

    /// Opcode of the command. The second SECTOR_SELECT packet has none
    /// and reports the sector number it carries.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Read { .. } => NFC_READ,
            Self::FastRead { .. } => NFC_FAST_READ,
            Self::FastWrite { .. } => NFC_FAST_WRITE,
            Self::SectorSelect => NFC_SECTOR_SELECT,
            Self::SectorSelectTarget { sector } => *sector,
        }
    }

    /// Encode the command into the raw bytes passed to `transceive`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Read { page } => vec![NFC_READ, *page],
            Self::FastRead { start, end } => vec![NFC_FAST_READ, *start, *end],
            Self::FastWrite { start, end, data } => {
                let mut buf = Vec::with_capacity(3 + data.len());
                buf.push(NFC_FAST_WRITE);
                buf.push(*start);
                buf.push(*end);
                buf.extend_from_slice(data);
                buf
            }
            Self::SectorSelect => vec![NFC_SECTOR_SELECT, SECTOR_SELECT_PARAM],
            Self::SectorSelectTarget { sector } => vec![*sector, 0x00, 0x00, 0x00],
        }
    }
}
