// nfcdose/src/protocol/session.rs

//! Session register decoding (NC_REG / NS_REG read through page 0xEC).

/// Handshake state decoded from a session register read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionRegisterStatus {
    /// NC_REG: PTHRU_ON_OFF
    pub pass_through: bool,
    /// NC_REG: TRANSFER_DIR (NFC -> I2C)
    pub transfer_dir: bool,
    /// NS_REG: memory access locked to the NFC interface
    pub nfc_locked: bool,
    /// NS_REG: SRAM data ready to be read by NFC
    pub read_ready: bool,
}

const NC_REG: usize = 0;
const NS_REG: usize = 6;

const PTHRU_ON_OFF: u8 = 6;
const TRANSFER_DIR: u8 = 0;
const NFC_LOCKED: u8 = 5;
const SRAM_READ_READY: u8 = 3;

fn bit(byte: u8, n: u8) -> bool {
    (byte >> n) & 1 == 1
}

impl SessionRegisterStatus {
    /// Decode a raw register read. NS_REG bits are only trusted when the
    /// response is longer than 7 bytes; missing bits read as clear.
    pub fn decode(data: &[u8]) -> Self {
        let nc = data.get(NC_REG).copied();
        let ns = if data.len() > 7 { data.get(NS_REG).copied() } else { None };
        Self {
            pass_through: nc.is_some_and(|b| bit(b, PTHRU_ON_OFF)),
            transfer_dir: nc.is_some_and(|b| bit(b, TRANSFER_DIR)),
            nfc_locked: ns.is_some_and(|b| bit(b, NFC_LOCKED)),
            read_ready: ns.is_some_and(|b| bit(b, SRAM_READ_READY)),
        }
    }

    /// Pre-condition for writing a command into SRAM.
    pub fn ready_for_write(&self) -> bool {
        self.pass_through && self.transfer_dir && self.nfc_locked
    }

    /// Pre-condition for reading the response out of SRAM.
    pub fn ready_for_read(&self) -> bool {
        self.nfc_locked && self.read_ready
    }
}

/// Which half of an exchange the poller waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handshake {
    /// Pass-through on, NFC to I2C, locked to NFC
    BeforeWrite,
    /// Locked to NFC, SRAM ready to read
    BeforeRead,
}

impl Handshake {
    /// Whether `status` allows this half of the exchange.
    pub fn is_satisfied(&self, status: &SessionRegisterStatus) -> bool {
        match self {
            Handshake::BeforeWrite => status.ready_for_write(),
            Handshake::BeforeRead => status.ready_for_read(),
        }
    }
}

/// Encode a register read with the given bits set. Test helper for
/// scripted links.
pub fn encode_status(status: SessionRegisterStatus) -> Vec<u8> {
    let mut out = vec![0u8; crate::constants::READ_RESPONSE_LEN];
    out[NC_REG] |= (status.pass_through as u8) << PTHRU_ON_OFF;
    out[NC_REG] |= (status.transfer_dir as u8) << TRANSFER_DIR;
    out[NS_REG] |= (status.nfc_locked as u8) << NFC_LOCKED;
    out[NS_REG] |= (status.read_ready as u8) << SRAM_READ_READY;
    out
}
