// nfcdose/src/engine/poller.rs

use log::{debug, warn};

use crate::engine::Session;
use crate::protocol::{Handshake, NfcCommand, SessionRegisterStatus};
use crate::{Error, Result};

impl Session<'_> {
    /// Poll the session registers until `handshake` holds.
    ///
    /// Fails with `Error::Timeout` once the poll deadline has passed on the
    /// session clock. A lost tag during the register read only means the
    /// condition is not met yet.
    pub async fn poll(&mut self, handshake: Handshake) -> Result<SessionRegisterStatus> {
        let start = self.clock.now();
        loop {
            match self.request(&NfcCommand::session_register()).await {
                Ok(raw) => {
                    let status = SessionRegisterStatus::decode(&raw);
                    if handshake.is_satisfied(&status) {
                        debug!("{:?} satisfied: {:?}", handshake, status);
                        return Ok(status);
                    }
                }
                Err(Error::TransientLinkLost) => {
                    warn!("tag link lost while polling {:?}", handshake);
                }
                Err(e) => return Err(e),
            }
            if self.clock.now().duration_since(start) > self.config.poll_deadline {
                warn!("{:?} not reached within {:?}", handshake, self.config.poll_deadline);
                return Err(Error::Timeout);
            }
            self.clock.sleep(self.config.poll_interval).await;
        }
    }
}
