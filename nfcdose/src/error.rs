// nfcdose/src/error.rs

//! Error type shared by the whole crate.

use thiserror::Error;

use crate::protocol::status::StatusCode;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag dropped out of the field. Recoverable by retrying; some
    /// call sites expect it (see `engine::exchange`).
    #[error("tag link lost")]
    TransientLinkLost,

    /// Link-level I/O failure reported by the transport.
    #[error("communication error: {0}")]
    CommunicationIo(String),

    /// The link is closed, or no link was supplied to the builder.
    #[error("tag link is not connected")]
    NotConnected,

    /// A session register handshake missed its deadline.
    #[error("operation timed out")]
    Timeout,

    /// The device answered with an error status.
    #[error("device status error: {status}")]
    DeviceStatus {
        /// Status code as received
        status: StatusCode,
    },

    /// Final error of a field or sector read once every attempt failed.
    /// `message` carries the last decoded device status, or is empty.
    #[error("device communication failed: {message}")]
    DeviceCommunication {
        /// Last status diagnostic, or empty
        message: String,
    },

    /// Fewer bytes than the layout requires.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length required
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Malformed frame or out-of-range address.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Calendar fields do not form a representable time.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Page count or page address beyond the 12-bit page space.
    #[error("page count {0} exceeds the device page address space")]
    InvalidPageCount(u32),

    /// Tag UID does not belong to a supported chip.
    #[error("unsupported tag: {0}")]
    UnsupportedTag(String),
}

impl Error {
    /// Whether the exchange engine may spend another attempt on this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::TransientLinkLost
                | Error::CommunicationIo(_)
                | Error::NotConnected
                | Error::Timeout
                | Error::DeviceStatus { .. }
                | Error::InvalidLength { .. }
                | Error::FrameFormat(_)
        )
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
