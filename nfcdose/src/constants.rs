// nfcdose/src/constants.rs
//! Wire constants shared by the codec, the exchange engine and the readers

/// NFC-A plain READ (returns 4 pages / 16 bytes)
pub const NFC_READ: u8 = 0x30;

/// NFC-A FAST_READ (page range)
pub const NFC_FAST_READ: u8 = 0x3A;

/// NFC-A FAST_WRITE (SRAM page range)
pub const NFC_FAST_WRITE: u8 = 0xA6;

/// NFC-A SECTOR_SELECT, first packet opcode
pub const NFC_SECTOR_SELECT: u8 = 0xC2;

/// Second byte of the first SECTOR_SELECT packet
pub const SECTOR_SELECT_PARAM: u8 = 0xFF;

/// Page address of the session registers (NC_REG / NS_REG)
pub const SESSION_REGISTER_PAGE: u8 = 0xEC;

/// First and last page of the pass-through SRAM window
pub const SRAM_START_PAGE: u8 = 0xF0;
/// Last page of the SRAM window
pub const SRAM_END_PAGE: u8 = 0xFF;

/// Size of the SRAM window in bytes (16 pages x 4 bytes)
pub const SRAM_LEN: usize = 64;

/// Bytes returned by one plain READ
pub const READ_RESPONSE_LEN: usize = 16;

/// Pages advanced per plain READ
pub const PAGES_PER_READ: u8 = 4;

/// Command frame header
pub const FRAME_HEADER: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

/// Fixed part of the common command data block; the nonce fills the rest
pub const COMMON_BLOCK_PREFIX: [u8; 6] = [0x00, 0x40, 0x00, 0x08, 0x0C, 0x00];
/// Common block: prefix(6) + nonce(2)
pub const COMMON_BLOCK_LEN: usize = 8;

/// Address header embedded in every specific command data block
pub const ADDRESS_HEADER: [u8; 5] = [0xF2, 0xFF, 0xFF, 0x00, 0x00];
/// offset(2) + category(1) + address header(5) + parameter(2) + length(1) + reserved(1)
pub const SPECIFIC_BLOCK_LEN: usize = 12;

/// header(4) + crc(4) + crc(4) + common(8) + specific(12)
pub const COMMAND_FRAME_LEN: usize = 4 + 4 + 4 + COMMON_BLOCK_LEN + SPECIFIC_BLOCK_LEN;

/// Response frame offsets inside the SRAM read
pub const RESPONSE_COMMON_CRC_OFFSET: usize = 0x04;
/// Payload CRC, LE u32
pub const RESPONSE_SPECIFIC_CRC_OFFSET: usize = 0x08;
/// Status code, two bytes
pub const RESPONSE_STATUS_OFFSET: usize = 0x0C;
/// Payload length, LE u16
pub const RESPONSE_LENGTH_OFFSET: usize = 0x10;
/// Start of the payload
pub const RESPONSE_PAYLOAD_OFFSET: usize = 0x14;

/// Size of one raw dosage record
pub const RECORD_LEN: usize = 13;

/// Trend data slots per device-memory page
pub const SLOTS_PER_PAGE: u8 = 16;

/// Page numbers are 12 bits wide in the trend-data address
pub const MAX_PAGE_COUNT: u32 = 1 << 12;

/// NXP manufacturer code, first byte of a supported tag UID
pub const NXP_MANUFACTURER_ID: u8 = 0x04;
