#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use nfcdose::clock::ManualClock;
use nfcdose::engine::Session;
use nfcdose::link::MockTagLink;
use nfcdose::nonce::FixedNonce;
use nfcdose::protocol::Handshake;
use nfcdose::test_support::{read_ready_status, write_ready_status};
use nfcdose::{Error, ReaderConfig};

#[tokio::test]
async fn pre_read_handshake_returns_immediately() {
    let mock = MockTagLink::new();
    mock.push_response(read_ready_status());
    let mut link = mock.clone();
    let clock = ManualClock::new();
    let config = ReaderConfig::default();
    let mut nonce = FixedNonce(0);
    let mut session = Session::open(&mut link, &clock, &config, &mut nonce)
        .await
        .unwrap();

    let status = session.poll(Handshake::BeforeRead).await.unwrap();
    assert!(status.read_ready);
    drop(session);
    assert_eq!(clock.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn write_ready_is_not_read_ready() {
    let mock = MockTagLink::new();
    mock.set_fallback(write_ready_status());
    let mut link = mock.clone();
    let clock = ManualClock::new();
    let config = ReaderConfig::default().with_poll_deadline(Duration::from_millis(50));
    let mut nonce = FixedNonce(0);
    let mut session = Session::open(&mut link, &clock, &config, &mut nonce)
        .await
        .unwrap();

    assert_eq!(
        session.poll(Handshake::BeforeRead).await,
        Err(Error::Timeout)
    );
    drop(session);
    // 0, 10, .. 50 ms are within the deadline, 60 ms is not
    assert_eq!(mock.sent().len(), 7);
}

#[tokio::test]
async fn never_ready_session_times_out_at_five_seconds() {
    let mock = MockTagLink::new();
    mock.set_fallback(vec![0u8; 16]);
    let mut link = mock.clone();
    let clock = ManualClock::new();
    let config = ReaderConfig::default();
    let mut nonce = FixedNonce(0);
    let mut session = Session::open(&mut link, &clock, &config, &mut nonce)
        .await
        .unwrap();

    assert_eq!(
        session.poll(Handshake::BeforeWrite).await,
        Err(Error::Timeout)
    );
    drop(session);
    assert!(clock.elapsed() > Duration::from_secs(5));
}
