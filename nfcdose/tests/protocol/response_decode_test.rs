use nfcdose::engine::exchange::decode_response;
use nfcdose::protocol::frame::encode_response;
use nfcdose::protocol::{SessionRegisterStatus, StatusCode, StatusType};
use nfcdose::Error;

#[test]
fn warning_status_still_yields_payload() {
    let raw = encode_response([0x12, 0x40], 1, &[0xAA, 0xBB]);
    assert_eq!(decode_response(&raw).unwrap(), vec![0xAA, 0xBB]);
}

#[test]
fn error_status_diagnostic() {
    let raw = encode_response([0b1100_0101, 0b1000_0010], 1, &[]);
    match decode_response(&raw) {
        Err(Error::DeviceStatus { status }) => {
            assert_eq!(status.status_type(), StatusType::Error);
            assert_eq!(status.to_string(), "0b1011 - 0b000101");
        }
        other => panic!("expected device status error, got: {:?}", other),
    }
}

#[test]
fn reserved_status_type_is_failure() {
    assert!(!StatusCode::from_bytes([0x00, 0xC0]).is_ok());
}

#[test]
fn session_register_from_device_read() {
    let raw = hex::decode("41000000000028000000000000000000").unwrap();
    let s = SessionRegisterStatus::decode(&raw);
    assert!(s.ready_for_write());
    assert!(s.ready_for_read());
}
