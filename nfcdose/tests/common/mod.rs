// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use nfcdose::clock::ManualClock;
use nfcdose::link::MockTagLink;
use nfcdose::nonce::FixedNonce;
use nfcdose::reader::DosimeterReader;
use nfcdose::ReaderConfig;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reader over a clone of `mock`, running on virtual time.
pub fn mock_reader(mock: &MockTagLink, clock: Arc<ManualClock>) -> DosimeterReader {
    mock_reader_with_config(mock, clock, ReaderConfig::default())
}

pub fn mock_reader_with_config(
    mock: &MockTagLink,
    clock: Arc<ManualClock>,
    config: ReaderConfig,
) -> DosimeterReader {
    DosimeterReader::builder()
        .with_link(Box::new(mock.clone()))
        .with_clock(clock)
        .with_nonce(Box::new(FixedNonce(0x5A5A)))
        .with_config(config)
        .build()
        .expect("reader with link")
}
