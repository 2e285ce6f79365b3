// nfcdose/src/engine/sector.rs

use log::debug;

use crate::engine::{LinkLossPolicy, Session};
use crate::protocol::NfcCommand;
use crate::Result;

impl Session<'_> {
    /// Two-packet SECTOR_SELECT.
    ///
    /// The tag acknowledges packet 2 passively by not answering, which the
    /// link reports as a lost tag; that outcome counts as success.
    pub async fn select_sector(&mut self, sector: u8) -> Result<()> {
        self.request(&NfcCommand::SectorSelect).await?;
        self.clock.sleep(self.config.settle_delay).await;
        self.transceive(
            &NfcCommand::SectorSelectTarget { sector },
            LinkLossPolicy::Tolerate,
        )
        .await?;
        debug!("sector {} selected", sector);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::ManualClock;
    use crate::config::ReaderConfig;
    use crate::engine::Session;
    use crate::link::MockTagLink;
    use crate::nonce::FixedNonce;
    use crate::Error;

    #[tokio::test]
    async fn select_sector_sends_both_packets() {
        let mock = MockTagLink::new();
        mock.push_response(vec![0x0A]);
        mock.push_error(Error::TransientLinkLost);
        let mut link = mock.clone();
        let clock = ManualClock::new();
        let config = ReaderConfig::default();
        let mut nonce = FixedNonce(0);
        let mut session = Session::open(&mut link, &clock, &config, &mut nonce)
            .await
            .unwrap();

        session.select_sector(1).await.unwrap();
        drop(session);

        assert_eq!(
            mock.sent(),
            vec![vec![0xC2, 0xFF], vec![0x01, 0x00, 0x00, 0x00]]
        );
        assert_eq!(clock.sleeps(), vec![config.settle_delay]);
    }

    #[tokio::test]
    async fn first_packet_loss_propagates() {
        let mock = MockTagLink::new();
        mock.push_error(Error::TransientLinkLost);
        let mut link = mock.clone();
        let clock = ManualClock::new();
        let config = ReaderConfig::default();
        let mut nonce = FixedNonce(0);
        let mut session = Session::open(&mut link, &clock, &config, &mut nonce)
            .await
            .unwrap();

        assert_eq!(session.select_sector(0).await, Err(Error::TransientLinkLost));
    }
}
