use nfcdose::protocol::{FieldKind, NfcCommand};

#[test]
fn trend_specific_block_bytes() {
    let kind = FieldKind::trend(2, 5).unwrap();
    // offset 0x00BC, category 0x05, param (2 << 4) | 5 = 0x0025, length 0x20
    assert_eq!(
        hex::encode(kind.specific_block()),
        "bc0005f2ffff000025002000"
    );
}

#[test]
fn scalar_specific_blocks() {
    assert_eq!(
        hex::encode(FieldKind::DeviceId.specific_block()),
        "0c0100f2ffff000000000400"
    );
    assert_eq!(
        hex::encode(FieldKind::PageCount.specific_block()),
        "1c0005f2ffff000000000400"
    );
    assert_eq!(
        hex::encode(FieldKind::Hp10Background.specific_block()),
        "7c0005f2ffff000000000400"
    );
    assert_eq!(
        hex::encode(FieldKind::Hp007Background.specific_block()),
        "9c0005f2ffff000000000400"
    );
}

#[test]
fn nfc_commands_on_the_wire() {
    assert_eq!(hex::encode(NfcCommand::session_register().encode()), "30ec");
    assert_eq!(hex::encode(NfcCommand::sram_read().encode()), "3af0ff");
    assert_eq!(hex::encode(NfcCommand::SectorSelect.encode()), "c2ff");
    assert_eq!(
        hex::encode(NfcCommand::SectorSelectTarget { sector: 0 }.encode()),
        "00000000"
    );
}

#[test]
fn trend_selector_rejects_pages_beyond_address_space() {
    assert_eq!(
        FieldKind::trend(0x1000, 0),
        Err(nfcdose::Error::InvalidPageCount(0x1000))
    );
}
