// nfcdose/src/reader/builder.rs

use std::sync::Arc;

use crate::clock::{Clock, TokioClock};
use crate::config::ReaderConfig;
use crate::link::TagLink;
use crate::nonce::{NonceSource, RandomNonce};
use crate::reader::DosimeterReader;
use crate::{Error, Result};

/// Helper to construct a DosimeterReader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    link: Option<Box<dyn TagLink>>,
    clock: Option<Arc<dyn Clock>>,
    nonce: Option<Box<dyn NonceSource>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Builder with default clock, nonce source and config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the tag link (e.g. MockTagLink)
    pub fn with_link(mut self, link: Box<dyn TagLink>) -> Self {
        self.link = Some(link);
        self
    }

    /// Clock for delays and deadlines.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Nonce source for command frames.
    pub fn with_nonce(mut self, nonce: Box<dyn NonceSource>) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. A link is required; otherwise returns NotConnected.
    pub fn build(self) -> Result<DosimeterReader> {
        let link = self.link.ok_or(Error::NotConnected)?;
        Ok(DosimeterReader::from_parts(
            link,
            self.clock.unwrap_or_else(|| Arc::new(TokioClock)),
            self.nonce.unwrap_or_else(|| Box::new(RandomNonce::new())),
            self.config,
        ))
    }
}
