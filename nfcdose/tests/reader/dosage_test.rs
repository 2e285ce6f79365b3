use chrono::NaiveDate;
use nfcdose::dosage::{csv_header, decode, CSV_HEADER};
use nfcdose::test_support::encode_abs_time;
use nfcdose::{ByteOrder, RawDosageRecord};

#[test]
fn error_flags_msb_first() {
    let f = decode::error_flags(0b1000_0001);
    assert_eq!(
        f.to_array(),
        [true, false, false, false, false, false, false, true]
    );
}

#[test]
fn big_endian_record() {
    // time bytes reversed, multi-byte fields high byte first
    let mut time = encode_abs_time(2023, 12, 31, 23, 59);
    time.reverse();
    let mut raw = [0u8; 13];
    raw[0..4].copy_from_slice(&time);
    raw[4] = 41;
    raw[5] = 30;
    raw[6..8].copy_from_slice(&[0x01, 0x00]);
    raw[8..10].copy_from_slice(&[0x00, 0x64]);
    raw[10..12].copy_from_slice(&[0x80, 0x64]);
    raw[12] = 0x40;

    let r = decode::decode_record(&RawDosageRecord::from_bytes(raw), ByteOrder::BigEndian).unwrap();
    assert_eq!(
        r.time,
        NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    );
    assert_eq!(r.accumulated_counter, 256);
    assert_eq!(r.hp10.to_string(), "5.00");
    assert_eq!(r.hp007.to_string(), "5000.00");
    assert!(r.error_flags.cpu);
    assert_eq!(r.minute_key(), "202312312359");
}

#[test]
fn header_has_one_title_per_column() {
    assert_eq!(CSV_HEADER.len(), 14);
    assert_eq!(csv_header(",").split(',').count(), 14);
}
