// nfcdose/src/config.rs

//! Reader configuration

use std::time::Duration;

use crate::types::ByteOrder;

/// Attempts per field or sector read
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Delay after close and after the first SECTOR_SELECT packet (ms)
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Interval between session register reads (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Give up on a handshake after this long (ms)
pub const DEFAULT_POLL_DEADLINE_MS: u64 = 5_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Timing and decoding knobs for a reading session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Exchange attempts per field or sector, at least 1
    pub max_attempts: u32,
    /// Pause between the steps of one exchange
    pub settle_delay: Duration,
    /// Pause between two session register reads
    pub poll_interval: Duration,
    /// Give up polling after this long
    pub poll_deadline: Duration,
    /// Byte order of multi-byte record fields (counter, dose)
    pub byte_order: ByteOrder,
    /// Reject tags whose UID does not start with the NXP manufacturer id
    pub check_tag_uid: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            settle_delay: ms(DEFAULT_SETTLE_DELAY_MS),
            poll_interval: ms(DEFAULT_POLL_INTERVAL_MS),
            poll_deadline: ms(DEFAULT_POLL_DEADLINE_MS),
            byte_order: ByteOrder::LittleEndian,
            check_tag_uid: true,
        }
    }
}

impl ReaderConfig {
    /// At least one attempt is always made.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the poll deadline.
    pub fn with_poll_deadline(mut self, deadline: Duration) -> Self {
        self.poll_deadline = deadline;
        self
    }

    /// Set the byte order used by the record decoder.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Enable or disable the NXP UID check in `DosimeterReader::read`.
    pub fn with_tag_uid_check(mut self, enabled: bool) -> Self {
        self.check_tag_uid = enabled;
        self
    }
}
