// nfcdose/src/engine/mod.rs

//! Exchange engine: the command/response cycle with the microcontroller
//! behind the tag, relayed through the SRAM pass-through window.

/// Field exchange through the SRAM window, with retries.
pub mod exchange;
/// Session register polling.
pub mod poller;
/// SECTOR_SELECT.
pub mod sector;

use log::{debug, warn};

use crate::clock::Clock;
use crate::config::ReaderConfig;
use crate::link::TagLink;
use crate::nonce::NonceSource;
use crate::protocol::NfcCommand;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// What to do when a transceive reports the tag left the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLossPolicy {
    /// Return the loss to the caller.
    Propagate,
    /// The device drops the link as part of handling this command
    Tolerate,
}

/// Exclusive use of a connected link for one reading session.
///
/// The link is connected on [`Session::open`] and closed when the session
/// is dropped, including on error and cancellation.
pub struct Session<'a> {
    link: &'a mut dyn TagLink,
    clock: &'a dyn Clock,
    config: &'a ReaderConfig,
    nonce: &'a mut dyn NonceSource,
}

impl<'a> Session<'a> {
    /// Connect the link and start a session over it.
    pub async fn open(
        link: &'a mut dyn TagLink,
        clock: &'a dyn Clock,
        config: &'a ReaderConfig,
        nonce: &'a mut dyn NonceSource,
    ) -> Result<Self> {
        let mut session = Self {
            link,
            clock,
            config,
            nonce,
        };
        if !session.link.is_connected() {
            session.link.connect().await?;
        }
        Ok(session)
    }

    /// Configuration the session runs with.
    pub fn config(&self) -> &ReaderConfig {
        self.config
    }

    /// Send a command, logging both directions at debug level.
    pub async fn transceive(
        &mut self,
        cmd: &NfcCommand,
        policy: LinkLossPolicy,
    ) -> Result<Option<Vec<u8>>> {
        debug!("-> {}", bytes_to_hex_spaced(&cmd.encode()));
        match self.link.execute(cmd).await {
            Ok(resp) => {
                debug!("<- {}", bytes_to_hex_spaced(&resp));
                Ok(Some(resp))
            }
            Err(Error::TransientLinkLost) if policy == LinkLossPolicy::Tolerate => {
                debug!("tag link lost after {:#04x}, expected", cmd.command_code());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Send a command whose answer is required.
    pub async fn request(&mut self, cmd: &NfcCommand) -> Result<Vec<u8>> {
        self.transceive(cmd, LinkLossPolicy::Propagate)
            .await?
            .ok_or(Error::TransientLinkLost)
    }

    /// Close (when connected), wait the settle delay, connect again.
    pub async fn reconnect(&mut self) -> Result<()> {
        if self.link.is_connected() {
            self.link.close()?;
        }
        self.clock.sleep(self.config.settle_delay).await;
        self.link.connect().await
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if self.link.is_connected() {
            if let Err(e) = self.link.close() {
                warn!("closing tag link failed: {}", e);
            }
        }
    }
}
