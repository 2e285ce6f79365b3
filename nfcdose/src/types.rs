// nfcdose/src/types.rs

//! Core value types.

use std::fmt;

use crate::constants::{MAX_PAGE_COUNT, RECORD_LEN, SLOTS_PER_PAGE};
use crate::Error;

/// Raw dosage record - Newtype Pattern (13 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawDosageRecord([u8; RECORD_LEN]);

impl RawDosageRecord {
    /// Record content used by the device to mark the end of stored data.
    pub const SENTINEL: Self = Self([0xFF; RECORD_LEN]);

    /// Wrap 13 raw bytes.
    pub fn from_bytes(bytes: [u8; RECORD_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw record bytes
    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    /// All-0xFF content terminates device-memory pagination.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Spaced uppercase hex, for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for RawDosageRecord {
    type Error = Error;

    /// Accepts any slice of at least 13 bytes and keeps the first 13; a plain
    /// READ returns 16 bytes of which only the record prefix is meaningful.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < RECORD_LEN {
            return Err(Error::InvalidLength {
                expected: RECORD_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; RECORD_LEN];
        arr.copy_from_slice(&bytes[..RECORD_LEN]);
        Ok(Self(arr))
    }
}

/// Byte order used when assembling multi-byte device fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Assemble a u16 in this order.
    pub fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    /// Assemble a u32 in this order.
    pub fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
        }
    }
}

/// Device id - decoded ASCII identifier, zero padded to 8 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, derive_more::Display, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{}", _0)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap an already decoded id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unsigned fixed-point number: `raw / 10^scale`.
///
/// Every scaled device quantity is a floor division of an integer by a
/// power-of-ten multiple, so keeping the scaled integer is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPoint {
    raw: u64,
    scale: u32,
}

impl FixedPoint {
    /// Value `raw / 10^scale`.
    pub const fn new(raw: u64, scale: u32) -> Self {
        Self { raw, scale }
    }

    /// Scaled integer (value * 10^scale)
    pub fn raw(&self) -> u64 {
        self.raw
    }

    /// Number of decimals
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Lossy conversion, for display and plotting.
    pub fn to_f64(&self) -> f64 {
        self.raw as f64 / 10f64.powi(self.scale as i32)
    }

    /// Format with exactly `decimals` digits after the point, truncating
    /// (never rounding up) when fewer decimals than `scale` are requested.
    pub fn format_with(&self, decimals: u32) -> String {
        let unit = 10u64.pow(self.scale);
        let int = self.raw / unit;
        let frac = self.raw % unit;
        if decimals == 0 {
            return int.to_string();
        }
        let frac = if decimals >= self.scale {
            frac * 10u64.pow(decimals - self.scale)
        } else {
            frac / 10u64.pow(self.scale - decimals)
        };
        format!("{}.{:0width$}", int, frac, width = decimals as usize)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(self.scale))
    }
}

/// Validated page/slot pair of one trend-data request: 12-bit page,
/// 4-bit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrendSlot {
    page: u16,
    slot: u8,
}

impl TrendSlot {
    /// Validate a page/slot pair.
    pub fn new(page: u32, slot: u8) -> crate::Result<Self> {
        if page >= MAX_PAGE_COUNT {
            return Err(Error::InvalidPageCount(page));
        }
        if slot >= SLOTS_PER_PAGE {
            return Err(Error::FrameFormat(format!("slot {slot} out of range")));
        }
        Ok(Self {
            page: page as u16,
            slot,
        })
    }

    /// 12-bit page
    pub fn page(&self) -> u16 {
        self.page
    }

    /// 4-bit slot
    pub fn slot(&self) -> u8 {
        self.slot
    }

    /// `(page << 4) | slot`, exact for every constructible value.
    pub fn packed(&self) -> u16 {
        (self.page << 4) | self.slot as u16
    }
}

impl From<TrendSlot> for MemoryAddress {
    fn from(t: TrendSlot) -> Self {
        MemoryAddress::DeviceMemory {
            page: t.page,
            slot: t.slot,
        }
    }
}

/// Logical location descriptor for the two memory layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAddress {
    /// Microcontroller memory, relayed through the SRAM window.
    DeviceMemory {
        /// 12-bit page
        page: u16,
        /// 4-bit slot inside the page
        slot: u8,
    },
    /// Tag memory: page range `start..=end` inside `sector`.
    TagMemory {
        /// Sector selected before reading
        sector: u8,
        /// First page
        start: u8,
        /// Last page, inclusive
        end: u8,
    },
}

impl MemoryAddress {
    /// Build a device-memory address, validating the 12-bit page and 4-bit
    /// slot ranges.
    pub fn device_memory(page: u32, slot: u8) -> crate::Result<Self> {
        TrendSlot::new(page, slot).map(Self::from)
    }

    /// Packed trend-data parameter: upper 12 bits page, lower 4 bits slot.
    /// `None` for tag memory and for out-of-range device-memory addresses.
    pub fn packed(&self) -> Option<u16> {
        match *self {
            MemoryAddress::DeviceMemory { page, slot } => TrendSlot::new(page as u32, slot)
                .ok()
                .map(|t| t.packed()),
            MemoryAddress::TagMemory { .. } => None,
        }
    }

    /// Start pages of every plain READ needed to cover a tag-memory range.
    pub fn read_pages(&self) -> Vec<u8> {
        match *self {
            MemoryAddress::TagMemory { start, end, .. } => {
                let step = crate::constants::PAGES_PER_READ as usize;
                (start as usize..=end as usize)
                    .step_by(step)
                    .map(|p| p as u8)
                    .collect()
            }
            MemoryAddress::DeviceMemory { .. } => Vec::new(),
        }
    }
}

/// The two tag-memory regions holding dosage records.
pub const NFC_SECTOR_0: MemoryAddress = MemoryAddress::TagMemory {
    sector: 0x00,
    start: 0x04,
    end: 0xDC,
};

/// Sector 1, pages 0x00..=0xFC
pub const NFC_SECTOR_1: MemoryAddress = MemoryAddress::TagMemory {
    sector: 0x01,
    start: 0x00,
    end: 0xFC,
};

/// Which memory a reading session walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReaderMode {
    /// 本体メモリ
    DeviceMemory,
    /// NFCメモリ
    Nfc,
}
