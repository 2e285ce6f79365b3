// nfcdose/src/protocol/status.rs

//! Response status codes.

use std::fmt;

/// Two-bit status type carried in the top bits of the second status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    /// 0b00
    Success,
    /// 0b01
    Warning,
    /// 0b10
    Error,
    /// 0b11
    Reserved,
}

impl StatusType {
    /// Decode the low two bits.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Success,
            0b01 => Self::Warning,
            0b10 => Self::Error,
            _ => Self::Reserved,
        }
    }
}

/// Status code of a response frame (bytes 0x0C..0x0E).
///
/// Layout over the little-endian pair `[b0, b1]`:
/// status type = b1[7:6], error type = b1[1:0] b0[7:6], error code = b0[5:0].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode([u8; 2]);

impl StatusCode {
    /// Wrap the two status bytes as read, `[b0, b1]`.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw status bytes
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Status type from b1[7:6]
    pub fn status_type(&self) -> StatusType {
        StatusType::from_bits(self.0[1] >> 6)
    }

    /// Success and warning both let the exchange proceed.
    pub fn is_ok(&self) -> bool {
        matches!(self.status_type(), StatusType::Success | StatusType::Warning)
    }

    /// 4-bit error type
    pub fn error_type(&self) -> u8 {
        ((self.0[1] & 0b11) << 2) | ((self.0[0] >> 6) & 0b11)
    }

    /// 6-bit error code
    pub fn error_code(&self) -> u8 {
        self.0[0] & 0b0011_1111
    }

    /// Diagnostic string, e.g. `0b0010 - 0b000101`.
    pub fn diagnostic(&self) -> String {
        format!("0b{:04b} - 0b{:06b}", self.error_type(), self.error_code())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diagnostic())
    }
}
