// fixtures.rs: commonly used device answers and records

use nfcdose::constants::RECORD_LEN;
use nfcdose::test_support::{encode_abs_time, RecordFields};

/// NXP UID
pub fn nxp_uid() -> Vec<u8> {
    vec![0x04, 0x9A, 0x3B, 0x12, 0x60, 0x5C, 0x80]
}

/// Device id payload decoding to "00001234"
pub fn device_id_payload() -> Vec<u8> {
    b"4321".to_vec()
}

/// Page count field holding `stored`; the device has `stored + 1` pages
pub fn page_count_payload(stored: u32) -> Vec<u8> {
    stored.to_le_bytes().to_vec()
}

pub fn background_payload(raw: u32) -> Vec<u8> {
    raw.to_le_bytes().to_vec()
}

pub fn record_at(minute: u32, counter: u16) -> [u8; RECORD_LEN] {
    RecordFields {
        time: encode_abs_time(2024, 3, 1, 12, minute),
        battery: 30,
        temperature: 21,
        counter,
        hp10: 100,
        hp007: 0x8000 | 100,
        flags: 0b1000_0001,
    }
    .encode()
}

/// One 32-byte trend payload: the given record followed by 0xFF fill.
pub fn trend_payload_with(record: &[u8; RECORD_LEN]) -> Vec<u8> {
    let mut out = vec![0xFF; 32];
    out[..RECORD_LEN].copy_from_slice(record);
    out
}

pub fn empty_trend_payload() -> Vec<u8> {
    vec![0xFF; 32]
}
