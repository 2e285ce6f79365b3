#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use nfcdose::clock::ManualClock;
use nfcdose::link::{MockTagLink, TagLink};
use nfcdose::test_support::{
    page_read_response, sector_select_script, seed_field_exchanges,
};
use nfcdose::{Error, ReaderMode, NFC_SECTOR_0, NFC_SECTOR_1};

use common::fixtures;

fn seed_sector(mock: &MockTagLink, reads: usize, first_minute: u32) {
    mock.push_all(sector_select_script());
    for i in 0..reads {
        let record = fixtures::record_at((first_minute + i as u32) % 60, i as u16);
        mock.push_response(page_read_response(&record));
    }
}

#[tokio::test]
async fn reads_both_sectors_then_device_id() -> anyhow::Result<()> {
    common::init_logging();
    let sector0 = NFC_SECTOR_0.read_pages().len();
    let sector1 = NFC_SECTOR_1.read_pages().len();
    assert_eq!((sector0, sector1), (55, 64));

    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    seed_sector(&mock, sector0, 0);
    seed_sector(&mock, sector1, 0);
    seed_field_exchanges(&mock, &[&fixtures::device_id_payload()]);

    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let snap = reader.read(ReaderMode::Nfc).await?;

    assert_eq!(snap.readings.len(), sector0 + sector1);
    assert_eq!(snap.device_id.as_str(), "00001234");
    assert!(snap.hp10_background.is_none());
    assert!(snap.readings.iter().all(|r| r.serial_number == "00001234"));
    assert_eq!(snap.readings[1].accumulated_counter, 1);
    assert_eq!(mock.remaining(), 0);
    assert!(!mock.is_connected());

    let sent = mock.sent();
    assert_eq!(sent[1], vec![0x00, 0x00, 0x00, 0x00]);
    assert_eq!(sent[2], vec![0x30, 0x04]);
    assert_eq!(sent[2 + sector0 + 1], vec![0x01, 0x00, 0x00, 0x00]);
    Ok(())
}

#[tokio::test]
async fn all_ff_pages_are_still_decoded() {
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    mock.push_all(sector_select_script());
    for _ in 0..55 {
        mock.push_response(vec![0xFF; 16]);
    }
    seed_sector(&mock, 64, 0);
    seed_field_exchanges(&mock, &[&fixtures::device_id_payload()]);

    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let snap = reader.read_nfc_memory().await.unwrap();
    assert_eq!(snap.readings.len(), 119);
}

#[tokio::test]
async fn failing_sector_exhausts_with_empty_message() {
    let mock = MockTagLink::with_uid(fixtures::nxp_uid());
    for _ in 0..4 {
        mock.push_all(sector_select_script());
        mock.push_error(Error::TransientLinkLost);
    }
    let mut reader = common::mock_reader(&mock, Arc::new(ManualClock::new()));
    let err = reader.read(ReaderMode::Nfc).await.unwrap_err();
    assert_eq!(
        err,
        Error::DeviceCommunication {
            message: String::new()
        }
    );
    assert_eq!(mock.remaining(), 0);
    assert!(!mock.is_connected());
}
