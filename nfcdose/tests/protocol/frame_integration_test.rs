use nfcdose::protocol::frame::encode_response;
use nfcdose::protocol::{crc32_mpeg2, CommandFrame, FieldKind, ResponseFrame};

#[test]
fn device_id_command_frame_bytes() {
    let frame = CommandFrame::for_field(FieldKind::DeviceId, 0x3412);
    let bytes = frame.encode();

    assert_eq!(hex::encode(&bytes[..4]), "00010000");
    assert_eq!(hex::encode(&bytes[12..20]), "004000080c001234");
    assert_eq!(hex::encode(&bytes[20..]), "0c0100f2ffff000000000400");

    let common_crc = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    let specific_crc = u32::from_le_bytes(bytes[8..12].try_into().unwrap());
    assert_eq!(common_crc, crc32_mpeg2(&bytes[12..20]));
    assert_eq!(specific_crc, crc32_mpeg2(&bytes[20..32]));
}

#[test]
fn device_shaped_response_validates() {
    let raw = encode_response([0x00, 0x00], 0x3412, b"4321");
    assert_eq!(raw.len(), 64);
    let resp = ResponseFrame::parse(&raw).unwrap();
    assert_eq!(resp.payload(), b"4321");
    assert!(resp.validate_crc().is_ok());
    assert_eq!(&resp.common()[6..8], &[0x12, 0x34]);
}
