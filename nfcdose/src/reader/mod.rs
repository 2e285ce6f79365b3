// nfcdose/src/reader/mod.rs

//! High-level reader: owns the tag link and runs one reading session at a
//! time.

/// 本体メモリ
pub mod device_memory;
/// NFCメモリ
pub mod nfc_memory;

mod builder;

pub use builder::ReaderBuilder;

use std::sync::Arc;

use log::{info, warn};

use crate::clock::{Clock, TokioClock};
use crate::config::ReaderConfig;
use crate::constants::NXP_MANUFACTURER_ID;
use crate::dosage::DeviceSnapshot;
use crate::engine::Session;
use crate::link::TagLink;
use crate::nonce::{NonceSource, RandomNonce};
use crate::types::ReaderMode;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Dosimeter reader bound to one tag link.
///
/// Sessions take `&mut self`, so two sessions can never share the link. The
/// link is closed when a session ends, whether it succeeds, fails or is
/// cancelled.
pub struct DosimeterReader {
    link: Box<dyn TagLink>,
    clock: Arc<dyn Clock>,
    nonce: Box<dyn NonceSource>,
    config: ReaderConfig,
}

impl DosimeterReader {
    /// Reader with the default configuration, the tokio clock and random
    /// nonces.
    pub fn new(link: Box<dyn TagLink>) -> Self {
        Self::from_parts(
            link,
            Arc::new(TokioClock),
            Box::new(RandomNonce::new()),
            ReaderConfig::default(),
        )
    }

    /// Start configuring a reader.
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    pub(crate) fn from_parts(
        link: Box<dyn TagLink>,
        clock: Arc<dyn Clock>,
        nonce: Box<dyn NonceSource>,
        config: ReaderConfig,
    ) -> Self {
        Self {
            link,
            clock,
            nonce,
            config,
        }
    }

    /// Configuration used by every session of this reader.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Check the tag is an NXP part when the link knows its UID.
    pub fn check_tag(&self) -> Result<()> {
        if !self.config.check_tag_uid {
            return Ok(());
        }
        match self.link.uid() {
            Some(uid) if uid.first() != Some(&NXP_MANUFACTURER_ID) => {
                Err(Error::UnsupportedTag(format!(
                    "uid {} is not an NXP tag",
                    bytes_to_hex_spaced(&uid)
                )))
            }
            _ => Ok(()),
        }
    }

    /// Check the tag, then read the memory selected by `mode`.
    pub async fn read(&mut self, mode: ReaderMode) -> Result<DeviceSnapshot> {
        self.check_tag()?;
        match mode {
            ReaderMode::DeviceMemory => self.read_device_memory().await,
            ReaderMode::Nfc => self.read_nfc_memory().await,
        }
    }

    /// Read device id, background values and all trend records from the
    /// device memory.
    pub async fn read_device_memory(&mut self) -> Result<DeviceSnapshot> {
        info!("reading device memory");
        let mut session = Session::open(
            self.link.as_mut(),
            self.clock.as_ref(),
            &self.config,
            self.nonce.as_mut(),
        )
        .await
        .map_err(session_error)?;
        device_memory::read(&mut session).await.map_err(session_error)
    }

    /// Read the records stored in both NFC memory sectors, then the device id.
    pub async fn read_nfc_memory(&mut self) -> Result<DeviceSnapshot> {
        info!("reading NFC memory");
        let mut session = Session::open(
            self.link.as_mut(),
            self.clock.as_ref(),
            &self.config,
            self.nonce.as_mut(),
        )
        .await
        .map_err(session_error)?;
        nfc_memory::read(&mut session).await.map_err(session_error)
    }
}

/// Link failures that escape a session surface as a communication failure
/// without a device diagnostic.
fn session_error(e: Error) -> Error {
    match e {
        Error::TransientLinkLost | Error::CommunicationIo(_) | Error::NotConnected => {
            warn!("reading session aborted: {}", e);
            Error::DeviceCommunication {
                message: String::new(),
            }
        }
        other => other,
    }
}
