use nfcdose::protocol::checksum::{crc32_mpeg2, crc32_mpeg2_parts};

#[test]
fn crc32_mpeg2_reference_vectors() {
    assert_eq!(crc32_mpeg2(b""), 0xFFFF_FFFF);
    assert_eq!(crc32_mpeg2(b"123456789"), 0x0376_E6E7);
}

#[test]
fn crc32_mpeg2_parts_match_whole() {
    let whole = hex::decode("004000080C00EFBE").unwrap();
    assert_eq!(
        crc32_mpeg2_parts(&[&whole[..3], &whole[3..]]),
        crc32_mpeg2(&whole)
    );
}
