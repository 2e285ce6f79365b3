#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use nfcdose::clock::ManualClock;
use nfcdose::link::{MockTagLink, TagLink};
use nfcdose::test_support::{failed_exchange_script, seed_field_exchanges};
use nfcdose::{DoseUnit, Error, ReaderMode};

use common::fixtures;

fn seed_header(mock: &MockTagLink, stored_pages: u32) {
    seed_field_exchanges(
        mock,
        &[
            &fixtures::device_id_payload(),
            &fixtures::page_count_payload(stored_pages),
            &fixtures::background_payload(12_345),
            &fixtures::background_payload(67_890),
        ],
    );
}

#[tokio::test]
async fn one_page_with_one_record_yields_one_reading() {
    common::init_logging();
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    seed_header(&mock, 0);
    let record = fixtures::record_at(30, 7);
    seed_field_exchanges(&mock, &[&fixtures::trend_payload_with(&record)]);
    for _ in 1..16 {
        seed_field_exchanges(&mock, &[&fixtures::empty_trend_payload()]);
    }

    let clock = Arc::new(ManualClock::new());
    let mut reader = common::mock_reader(&mock, clock.clone());
    let snap = reader.read(ReaderMode::DeviceMemory).await.unwrap();

    assert_eq!(snap.device_id.as_str(), "00001234");
    assert_eq!(snap.hp10_background.unwrap().to_string(), "0.12345");
    assert_eq!(snap.hp007_background.unwrap().to_string(), "0.67890");
    assert_eq!(snap.readings.len(), 1);

    let r = &snap.readings[0];
    assert_eq!(r.serial_number, "00001234");
    assert_eq!(r.id, "2024030112300000001234");
    assert_eq!(r.accumulated_counter, 7);
    assert_eq!(r.hp10.to_string(), "5.00");
    assert_eq!(r.hp007.to_string(), "5000.00");
    assert_eq!(r.hp007.unit, DoseUnit::MilliSievert);
    assert_eq!(
        r.to_separated_string(","),
        "03/01/2024 12:30,3.0,21,7,5.00,5000.00,1,0,0,0,0,0,0,1"
    );

    // 4 header fields + 16 trend slots, everything consumed
    assert_eq!(mock.remaining(), 0);
    assert!(!mock.is_connected());
    let writes = mock
        .sent()
        .iter()
        .filter(|f| f.first() == Some(&0xA6))
        .count();
    assert_eq!(writes, 20);
}

#[tokio::test]
async fn trend_reads_walk_pages_and_slots_in_order() {
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    seed_header(&mock, 1);
    for _ in 0..32 {
        seed_field_exchanges(&mock, &[&fixtures::empty_trend_payload()]);
    }
    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let snap = reader.read_device_memory().await.unwrap();
    assert!(snap.readings.is_empty());

    let params: Vec<(u8, u8)> = mock
        .sent()
        .iter()
        .filter(|f| f.first() == Some(&0xA6))
        .skip(4)
        // specific block starts at frame offset 20, after the A6 F0 FF prefix
        .map(|f| (f[3 + 20 + 8], f[3 + 20 + 9]))
        .collect();
    assert_eq!(params.len(), 32);
    assert_eq!(params[0], (0x00, 0x00));
    assert_eq!(params[15], (0x0F, 0x00));
    assert_eq!(params[16], (0x10, 0x00));
    assert_eq!(params[31], (0x1F, 0x00));
}

#[tokio::test]
async fn exhausted_field_read_fails_whole_session() {
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    for _ in 0..4 {
        mock.push_all(failed_exchange_script([0x03, 0x81]));
    }
    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let err = reader.read(ReaderMode::DeviceMemory).await.unwrap_err();
    assert_eq!(
        err,
        Error::DeviceCommunication {
            message: "0b0100 - 0b000011".into()
        }
    );
    assert!(!mock.is_connected());
}

#[tokio::test]
async fn oversized_page_count_is_rejected() {
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    seed_header(&mock, 0x1000);
    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let err = reader.read_device_memory().await.unwrap_err();
    assert_eq!(err, Error::InvalidPageCount(0x1001));
}
