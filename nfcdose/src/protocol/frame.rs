// nfcdose/src/protocol/frame.rs

//! MCU command and response frames.

use crate::constants::{
    COMMAND_FRAME_LEN, COMMON_BLOCK_LEN, COMMON_BLOCK_PREFIX, FRAME_HEADER,
    RESPONSE_COMMON_CRC_OFFSET, RESPONSE_LENGTH_OFFSET, RESPONSE_PAYLOAD_OFFSET,
    RESPONSE_SPECIFIC_CRC_OFFSET, RESPONSE_STATUS_OFFSET, SPECIFIC_BLOCK_LEN, SRAM_LEN,
};
use crate::protocol::checksum::crc32_mpeg2;
use crate::protocol::field::FieldKind;
use crate::protocol::parser;
use crate::protocol::status::StatusCode;
use crate::{Error, Result};

/// Build the common command data block. `nonce` only pairs a request
/// with its response; it carries no security meaning.
pub fn build_common_block(nonce: u16) -> [u8; COMMON_BLOCK_LEN] {
    let mut out = [0u8; COMMON_BLOCK_LEN];
    out[..6].copy_from_slice(&COMMON_BLOCK_PREFIX);
    out[6..].copy_from_slice(&nonce.to_le_bytes());
    out
}

/// Outbound MCU command frame.
/// Format: [Header(4)] [CRC(common) LE(4)] [CRC(specific) LE(4)] [Common(8)] [Specific(12)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    /// Common command data block
    pub common: [u8; COMMON_BLOCK_LEN],
    /// Specific command data block
    pub specific: [u8; SPECIFIC_BLOCK_LEN],
}

impl CommandFrame {
    /// Frame from prebuilt blocks.
    pub fn new(common: [u8; COMMON_BLOCK_LEN], specific: [u8; SPECIFIC_BLOCK_LEN]) -> Self {
        Self { common, specific }
    }

    /// Frame requesting one device-memory field.
    pub fn for_field(kind: FieldKind, nonce: u16) -> Self {
        Self::new(build_common_block(nonce), kind.specific_block())
    }

    /// CRC-32/MPEG-2 of the common block.
    pub fn common_crc(&self) -> u32 {
        crc32_mpeg2(&self.common)
    }

    /// CRC-32/MPEG-2 of the specific block.
    pub fn specific_crc(&self) -> u32 {
        crc32_mpeg2(&self.specific)
    }

    /// Encode into wire bytes.
    pub fn encode(&self) -> [u8; COMMAND_FRAME_LEN] {
        let mut out = [0u8; COMMAND_FRAME_LEN];
        out[0..4].copy_from_slice(&FRAME_HEADER);
        out[4..8].copy_from_slice(&self.common_crc().to_le_bytes());
        out[8..12].copy_from_slice(&self.specific_crc().to_le_bytes());
        out[12..12 + COMMON_BLOCK_LEN].copy_from_slice(&self.common);
        out[12 + COMMON_BLOCK_LEN..].copy_from_slice(&self.specific);
        out
    }

    /// Encode and zero-pad to the full SRAM window written by FAST_WRITE.
    pub fn to_sram_block(&self) -> [u8; SRAM_LEN] {
        let mut out = [0u8; SRAM_LEN];
        out[..COMMAND_FRAME_LEN].copy_from_slice(&self.encode());
        out
    }
}

/// Outcome of the CRC check on a response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcReport {
    /// Common block CRC carried by the frame
    pub common_expected: u32,
    /// Common block CRC recomputed
    pub common_actual: u32,
    /// Payload CRC carried by the frame
    pub specific_expected: u32,
    /// Payload CRC recomputed
    pub specific_actual: u32,
}

impl CrcReport {
    /// Common block CRC matches.
    pub fn common_ok(&self) -> bool {
        self.common_expected == self.common_actual
    }

    /// Payload CRC matches.
    pub fn specific_ok(&self) -> bool {
        self.specific_expected == self.specific_actual
    }

    /// Both CRCs match.
    pub fn is_ok(&self) -> bool {
        self.common_ok() && self.specific_ok()
    }
}

/// Inbound MCU response frame, a validated view over the SRAM read.
///
/// Layout: [Header(4)] [CRC(common)(4)] [CRC(specific)(4)] [Status(2)]
/// [..(2)] [Length LE(2)] [..(2)] [Payload(len)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFrame<'a> {
    raw: &'a [u8],
    payload_len: usize,
}

impl<'a> ResponseFrame<'a> {
    /// Parse a raw SRAM read. Fails if the declared payload does not fit.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        parser::ensure_len(raw, RESPONSE_PAYLOAD_OFFSET)?;
        let payload_len = parser::le_u16_at(raw, RESPONSE_LENGTH_OFFSET)? as usize;
        let end = RESPONSE_PAYLOAD_OFFSET + payload_len;
        if raw.len() < end {
            return Err(Error::FrameFormat(format!(
                "payload length {} exceeds frame of {} bytes",
                payload_len,
                raw.len()
            )));
        }
        Ok(Self { raw, payload_len })
    }

    /// Declared payload length
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Payload bytes, 0x14..0x14+len.
    pub fn payload(&self) -> &'a [u8] {
        &self.raw[RESPONSE_PAYLOAD_OFFSET..RESPONSE_PAYLOAD_OFFSET + self.payload_len]
    }

    /// Status code at 0x0C.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_bytes([
            self.raw[RESPONSE_STATUS_OFFSET],
            self.raw[RESPONSE_STATUS_OFFSET + 1],
        ])
    }

    /// Common block of the response (bytes 0x0C..0x14).
    pub fn common(&self) -> &'a [u8] {
        &self.raw[RESPONSE_STATUS_OFFSET..RESPONSE_PAYLOAD_OFFSET]
    }

    /// Common block CRC as carried at 0x04.
    pub fn common_crc(&self) -> u32 {
        u32::from_le_bytes([
            self.raw[RESPONSE_COMMON_CRC_OFFSET],
            self.raw[RESPONSE_COMMON_CRC_OFFSET + 1],
            self.raw[RESPONSE_COMMON_CRC_OFFSET + 2],
            self.raw[RESPONSE_COMMON_CRC_OFFSET + 3],
        ])
    }

    /// Payload CRC as carried at 0x08.
    pub fn specific_crc(&self) -> u32 {
        u32::from_le_bytes([
            self.raw[RESPONSE_SPECIFIC_CRC_OFFSET],
            self.raw[RESPONSE_SPECIFIC_CRC_OFFSET + 1],
            self.raw[RESPONSE_SPECIFIC_CRC_OFFSET + 2],
            self.raw[RESPONSE_SPECIFIC_CRC_OFFSET + 3],
        ])
    }

    /// Recompute both CRCs. The caller decides what a mismatch means.
    pub fn validate_crc(&self) -> CrcReport {
        CrcReport {
            common_expected: self.common_crc(),
            common_actual: crc32_mpeg2(self.common()),
            specific_expected: self.specific_crc(),
            specific_actual: crc32_mpeg2(self.payload()),
        }
    }
}

/// Build a response frame the way the device does. Used by tests and the
/// mock link.
pub fn encode_response(status: [u8; 2], nonce: u16, payload: &[u8]) -> Vec<u8> {
    let mut common = [0u8; COMMON_BLOCK_LEN];
    common[0..2].copy_from_slice(&status);
    common[4..6].copy_from_slice(&(payload.len() as u16).to_le_bytes());
    common[6..8].copy_from_slice(&nonce.to_le_bytes());

    let mut out = Vec::with_capacity(SRAM_LEN.max(RESPONSE_PAYLOAD_OFFSET + payload.len()));
    out.extend_from_slice(&FRAME_HEADER);
    out.extend_from_slice(&crc32_mpeg2(&common).to_le_bytes());
    out.extend_from_slice(&crc32_mpeg2(payload).to_le_bytes());
    out.extend_from_slice(&common);
    out.extend_from_slice(payload);
    if out.len() < SRAM_LEN {
        out.resize(SRAM_LEN, 0);
    }
    out
}
