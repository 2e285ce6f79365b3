// nfcdose/src/link/traits.rs

//! The `TagLink` trait every NFC-A transport implements.

use async_trait::async_trait;

use crate::protocol::NfcCommand;
use crate::Result;

/// Tag link abstracts the NFC-A handle away from protocol/session logic.
///
/// `transceive` must report a tag that left the field as
/// `Error::TransientLinkLost` and any other transport failure as
/// `Error::CommunicationIo`.
#[async_trait]
pub trait TagLink: Send {
    /// Open the link to the tag currently in the field
    async fn connect(&mut self) -> Result<()>;

    /// Close the link. Must be safe to call on every exit path.
    fn close(&mut self) -> Result<()>;

    /// Whether the tag is currently connected.
    fn is_connected(&self) -> bool;

    /// Send a raw frame and return the raw answer
    async fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Anti-collision UID of the tag, when the link knows it.
    fn uid(&self) -> Option<Vec<u8>> {
        None
    }

    /// Encode and send a command. Default implementation forwards to
    /// `transceive`.
    async fn execute(&mut self, cmd: &NfcCommand) -> Result<Vec<u8>> {
        let bytes = cmd.encode();
        self.transceive(&bytes).await
    }
}
