// nfcdose/src/engine/exchange.rs

use log::{debug, info, warn};

use crate::engine::{LinkLossPolicy, Session};
use crate::protocol::{CommandFrame, FieldKind, Handshake, NfcCommand, ResponseFrame};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

impl Session<'_> {
    /// Read one device-memory field, retrying whole exchanges.
    ///
    /// After the attempt budget is spent the error is
    /// `Error::DeviceCommunication` carrying the last device status
    /// diagnostic (empty when the device never answered with one).
    pub async fn read_field(&mut self, kind: FieldKind) -> Result<Vec<u8>> {
        let attempts = self.config.max_attempts.max(1);
        let mut message = String::new();
        for attempt in 1..=attempts {
            match self.exchange(kind).await {
                Ok(payload) => return Ok(payload),
                Err(Error::DeviceStatus { status }) => {
                    warn!(
                        "{:?}: attempt {}/{} rejected by device: {}",
                        kind, attempt, attempts, status
                    );
                    message = status.diagnostic();
                }
                Err(e) if e.is_retryable() => {
                    warn!("{:?}: attempt {}/{} failed: {}", kind, attempt, attempts, e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(Error::DeviceCommunication { message })
    }

    /// One write/read cycle through the SRAM window.
    async fn exchange(&mut self, kind: FieldKind) -> Result<Vec<u8>> {
        let frame = CommandFrame::for_field(kind, self.nonce.next_nonce());
        let settle = self.config.settle_delay;

        self.select_sector(0).await?;
        self.clock.sleep(settle).await;
        self.poll(Handshake::BeforeWrite).await?;
        self.clock.sleep(settle).await;

        let write = NfcCommand::sram_write(frame.to_sram_block());
        self.transceive(&write, LinkLossPolicy::Tolerate).await?;
        debug!("{:?}: command written", kind);

        self.reconnect().await?;
        self.select_sector(0).await?;
        self.poll(Handshake::BeforeRead).await?;
        self.clock.sleep(settle).await;

        let raw = self.request(&NfcCommand::sram_read()).await?;
        let payload = decode_response(&raw)?;
        info!("{:?}: {}", kind, bytes_to_hex_spaced(&payload));
        Ok(payload)
    }
}

/// Validate a raw SRAM read and extract its payload.
///
/// CRC mismatches are logged and otherwise ignored; a failure status is
/// returned as `Error::DeviceStatus`.
pub fn decode_response(raw: &[u8]) -> Result<Vec<u8>> {
    let response = ResponseFrame::parse(raw)?;
    let crc = response.validate_crc();
    if !crc.common_ok() {
        warn!(
            "common block crc mismatch: expected {:#010x}, computed {:#010x}",
            crc.common_expected, crc.common_actual
        );
    }
    if !crc.specific_ok() {
        warn!(
            "payload crc mismatch: expected {:#010x}, computed {:#010x}",
            crc.specific_expected, crc.specific_actual
        );
    }
    let status = response.status();
    if !status.is_ok() {
        return Err(Error::DeviceStatus { status });
    }
    Ok(response.payload().to_vec())
}
