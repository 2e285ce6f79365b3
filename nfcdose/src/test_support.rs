//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build the scripted link responses for whole exchanges so
//! tests across the crate and the tests/ directory share one notion of how
//! the device answers.
#![allow(dead_code)]

use crate::constants::{READ_RESPONSE_LEN, RECORD_LEN};
use crate::link::MockTagLink;
use crate::protocol::frame::encode_response;
use crate::protocol::session::encode_status;
use crate::protocol::SessionRegisterStatus;
use crate::{Error, Result};

/// Session register read satisfying the pre-write handshake.
#[doc(hidden)]
pub fn write_ready_status() -> Vec<u8> {
    encode_status(SessionRegisterStatus {
        pass_through: true,
        transfer_dir: true,
        nfc_locked: true,
        read_ready: false,
    })
}

/// Session register read satisfying the pre-read handshake.
#[doc(hidden)]
pub fn read_ready_status() -> Vec<u8> {
    encode_status(SessionRegisterStatus {
        pass_through: false,
        transfer_dir: false,
        nfc_locked: true,
        read_ready: true,
    })
}

/// Two-packet SECTOR_SELECT: ACK, then the passive ACK reported as a lost tag.
#[doc(hidden)]
pub fn sector_select_script() -> Vec<Result<Vec<u8>>> {
    vec![Ok(vec![0x0A]), Err(Error::TransientLinkLost)]
}

/// Link results for one field exchange attempt ending in the given SRAM read.
#[doc(hidden)]
pub fn exchange_script_with_read(sram_read: Vec<u8>) -> Vec<Result<Vec<u8>>> {
    let mut script = sector_select_script();
    script.push(Ok(write_ready_status()));
    // FAST_WRITE: the device drops the link while taking the command
    script.push(Err(Error::TransientLinkLost));
    script.extend(sector_select_script());
    script.push(Ok(read_ready_status()));
    script.push(Ok(sram_read));
    script
}

/// Link results for one successful field exchange returning `payload`.
#[doc(hidden)]
pub fn field_exchange_script(payload: &[u8]) -> Vec<Result<Vec<u8>>> {
    exchange_script_with_read(encode_response([0x00, 0x00], 0, payload))
}

/// Link results for one attempt answered with a failure status.
#[doc(hidden)]
pub fn failed_exchange_script(status: [u8; 2]) -> Vec<Result<Vec<u8>>> {
    exchange_script_with_read(encode_response(status, 0, &[]))
}

/// Link results for one attempt whose pre-write poll never becomes ready.
/// `polls` is the number of register reads the poller makes before its
/// deadline passes.
#[doc(hidden)]
pub fn stalled_exchange_script(polls: usize) -> Vec<Result<Vec<u8>>> {
    let mut script = sector_select_script();
    script.extend((0..polls).map(|_| Ok(encode_status(SessionRegisterStatus::default()))));
    script
}

/// Queue the exchanges for several fields, in order.
#[doc(hidden)]
pub fn seed_field_exchanges(mock: &MockTagLink, payloads: &[&[u8]]) {
    for p in payloads {
        mock.push_all(field_exchange_script(p));
    }
}

/// Encode a timestamp with the packed BCD layout used by records.
#[doc(hidden)]
pub fn encode_abs_time(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> [u8; 4] {
    let (min_t, min_u) = ((minute / 10) as u8, (minute % 10) as u8);
    let (hour_t, hour_u) = ((hour / 10) as u8, (hour % 10) as u8);
    let (day_t, day_u) = ((day / 10) as u8, (day % 10) as u8);
    let (mon_t, mon_u) = ((month / 10) as u8, (month % 10) as u8);
    let yy = year.saturating_sub(2000);
    let (year_t, year_u) = ((yy / 10) as u8, (yy % 10) as u8);

    let b0 = (min_u & 0x0F) | ((min_t & 0x07) << 4) | ((hour_u & 0x01) << 7);
    let b1 = ((hour_u >> 1) & 0x07) | ((hour_t & 0x03) << 3) | ((day_u & 0x07) << 5);
    let b2 = ((day_u >> 3) & 0x01) | ((day_t & 0x03) << 1) | ((mon_u & 0x0F) << 3) | ((mon_t & 0x01) << 7);
    let b3 = ((year_t & 0x0F) << 4) | (year_u & 0x0F);
    [b0, b1, b2, b3]
}

/// Fields of one raw record, little-endian layout.
#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub struct RecordFields {
    pub time: [u8; 4],
    pub battery: u8,
    pub temperature: u8,
    pub counter: u16,
    pub hp10: u16,
    pub hp007: u16,
    pub flags: u8,
}

impl RecordFields {
    /// Raw 13-byte record.
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        out[0..4].copy_from_slice(&self.time);
        out[4] = self.battery;
        out[5] = self.temperature;
        out[6..8].copy_from_slice(&self.counter.to_le_bytes());
        out[8..10].copy_from_slice(&self.hp10.to_le_bytes());
        out[10..12].copy_from_slice(&self.hp007.to_le_bytes());
        out[12] = self.flags;
        out
    }
}

/// A plausible record: 2024-05-17 09:42, 3.7 V, 25 C, counter 42.
#[doc(hidden)]
pub fn sample_record() -> RecordFields {
    RecordFields {
        time: encode_abs_time(2024, 5, 17, 9, 42),
        battery: 37,
        temperature: 25,
        counter: 42,
        hp10: 100,
        hp007: 40,
        flags: 0,
    }
}

/// A plain READ answer carrying `record` in its first 13 bytes.
#[doc(hidden)]
pub fn page_read_response(record: &[u8; RECORD_LEN]) -> Vec<u8> {
    let mut out = vec![0u8; READ_RESPONSE_LEN];
    out[..RECORD_LEN].copy_from_slice(record);
    out
}
