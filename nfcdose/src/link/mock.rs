// nfcdose/src/link/mock.rs

//! Scripted in-memory tag link.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::link::traits::TagLink;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: VecDeque<Result<Vec<u8>>>,
    fallback: Option<Vec<u8>>,
    connected: bool,
    connects: usize,
    closes: usize,
    connect_failures: usize,
    uid: Option<Vec<u8>>,
}

/// Mock tag link for unit tests. It records sent frames and returns queued
/// results in order.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the reader owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTagLink {
    state: Arc<Mutex<MockState>>,
}

impl MockTagLink {
    /// Empty script, disconnected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that reports an NXP tag UID.
    pub fn with_uid(uid: Vec<u8>) -> Self {
        let mock = Self::new();
        mock.lock().uid = Some(uid);
        mock
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A poisoned mock only happens after a panicking test.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue one successful answer.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.lock().responses.push_back(Ok(resp));
    }

    /// Queue one failed transceive.
    pub fn push_error(&self, err: Error) {
        self.lock().responses.push_back(Err(err));
    }

    /// Queue a whole script, in order.
    pub fn push_all<I: IntoIterator<Item = Result<Vec<u8>>>>(&self, items: I) {
        self.lock().responses.extend(items);
    }

    /// Response returned once the queue is drained. Without one the mock
    /// answers `CommunicationIo`.
    pub fn set_fallback(&self, resp: Vec<u8>) {
        self.lock().fallback = Some(resp);
    }

    /// Make the next `n` connect calls fail.
    pub fn set_connect_failures(&self, n: usize) {
        self.lock().connect_failures = n;
    }

    /// Every command sent so far
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    /// Scripted results not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock().responses.len()
    }

    /// Number of successful `connect` calls
    pub fn connect_count(&self) -> usize {
        self.lock().connects
    }

    /// Number of `close` calls
    pub fn close_count(&self) -> usize {
        self.lock().closes
    }
}

#[async_trait]
impl TagLink for MockTagLink {
    async fn connect(&mut self) -> Result<()> {
        let mut s = self.lock();
        s.connects += 1;
        if s.connect_failures > 0 {
            s.connect_failures -= 1;
            return Err(Error::CommunicationIo("mock connect failure".into()));
        }
        s.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let mut s = self.lock();
        s.closes += 1;
        s.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.lock().connected
    }

    async fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut s = self.lock();
        if !s.connected {
            return Err(Error::NotConnected);
        }
        s.sent.push(data.to_vec());
        match s.responses.pop_front() {
            Some(r) => r,
            None => s
                .fallback
                .clone()
                .ok_or_else(|| Error::CommunicationIo("no scripted response".into())),
        }
    }

    fn uid(&self) -> Option<Vec<u8>> {
        self.lock().uid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_link_basic() {
        let mut m = MockTagLink::new();
        m.push_response(vec![0x01]);
        m.connect().await.unwrap();
        let r = m.transceive(&[0xaa]).await.unwrap();
        assert_eq!(r, vec![0x01]);
        assert_eq!(m.sent(), vec![vec![0xaa]]);
    }

    #[tokio::test]
    async fn mock_link_errors_and_fallback() {
        let mut m = MockTagLink::new();
        m.push_error(Error::TransientLinkLost);
        m.connect().await.unwrap();
        assert_eq!(m.transceive(&[0]).await, Err(Error::TransientLinkLost));
        assert!(matches!(
            m.transceive(&[0]).await,
            Err(Error::CommunicationIo(_))
        ));
        m.set_fallback(vec![0x42]);
        assert_eq!(m.transceive(&[0]).await.unwrap(), vec![0x42]);
        assert_eq!(m.transceive(&[0]).await.unwrap(), vec![0x42]);
    }

    #[tokio::test]
    async fn mock_link_requires_connect() {
        let mut m = MockTagLink::new();
        m.push_response(vec![0x01]);
        assert_eq!(m.transceive(&[0]).await, Err(Error::NotConnected));
        assert_eq!(m.remaining(), 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let handle = MockTagLink::with_uid(vec![0x04, 0x11]);
        let mut owned = handle.clone();
        owned.set_connect_failures(1);
        assert!(owned.connect().await.is_err());
        owned.connect().await.unwrap();
        assert!(handle.is_connected());
        owned.close().unwrap();
        assert!(!handle.is_connected());
        assert_eq!(handle.connect_count(), 2);
        assert_eq!(handle.close_count(), 1);
        assert_eq!(handle.uid(), Some(vec![0x04, 0x11]));
    }
}
