// nfcdose/src/protocol/field.rs

//! Registry of device-memory fields readable through the pass-through
//! window, and the specific command data block built from them.

use crate::constants::{ADDRESS_HEADER, SPECIFIC_BLOCK_LEN};
use crate::types::TrendSlot;
use crate::Result;

/// Static layout of one device-memory field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Memory category byte
    pub category: u8,
    /// Byte offset inside the category
    pub offset: u16,
    /// Number of payload bytes the device returns for the field.
    pub length: u8,
}

impl FieldLayout {
    /// Layout from its three table columns.
    pub const fn new(category: u8, offset: u16, length: u8) -> Self {
        Self {
            category,
            offset,
            length,
        }
    }

    /// High byte of the offset
    pub fn offset_high(&self) -> u8 {
        (self.offset >> 8) as u8
    }

    /// Low byte of the offset
    pub fn offset_low(&self) -> u8 {
        (self.offset & 0xFF) as u8
    }
}

/// 機器ID
pub const DEVICE_ID: FieldLayout = FieldLayout::new(0x00, 0x010C, 4);
/// 線量測定データ保存ページ数 (stored as "count - 1")
pub const PAGE_COUNT: FieldLayout = FieldLayout::new(0x05, 0x001C, 4);
/// Hp(10) BG値
pub const HP10_BACKGROUND: FieldLayout = FieldLayout::new(0x05, 0x007C, 4);
/// Hp(0.07) BG値
pub const HP007_BACKGROUND: FieldLayout = FieldLayout::new(0x05, 0x009C, 4);
/// トレンドデータ, one page/slot per request
pub const TREND_DATA: FieldLayout = FieldLayout::new(0x05, 0x00BC, 32);

/// Field selector. Trend data carries its page/slot address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 機器ID
    DeviceId,
    /// 保存ページ数
    PageCount,
    /// Hp(10) BG値
    Hp10Background,
    /// Hp(0.07) BG値
    Hp007Background,
    /// One 32-byte slot of trend data
    TrendData(TrendSlot),
}

impl FieldKind {
    /// Static layout of the field.
    pub fn layout(&self) -> FieldLayout {
        match self {
            Self::DeviceId => DEVICE_ID,
            Self::PageCount => PAGE_COUNT,
            Self::Hp10Background => HP10_BACKGROUND,
            Self::Hp007Background => HP007_BACKGROUND,
            Self::TrendData(_) => TREND_DATA,
        }
    }

    /// Trend-data selector for one page/slot, validated against the
    /// 12-bit page and 4-bit slot ranges.
    pub fn trend(page: u32, slot: u8) -> Result<Self> {
        TrendSlot::new(page, slot).map(Self::TrendData)
    }

    /// The two parameter bytes following the address header.
    fn parameter(&self) -> u16 {
        match *self {
            Self::TrendData(t) => t.packed(),
            _ => 0,
        }
    }

    /// Extra bytes of the specific block: parameter (LE), length, reserved.
    pub fn extra(&self) -> [u8; 4] {
        let [lo, hi] = self.parameter().to_le_bytes();
        [lo, hi, self.layout().length, 0x00]
    }

    /// Encode the specific command data block for this field.
    pub fn specific_block(&self) -> [u8; SPECIFIC_BLOCK_LEN] {
        let layout = self.layout();
        build_specific_block(
            layout.category,
            layout.offset_high(),
            layout.offset_low(),
            ADDRESS_HEADER,
            self.extra(),
        )
    }
}

/// Assemble a specific command data block. Offsets go out low byte first.
pub fn build_specific_block(
    category: u8,
    offset_high: u8,
    offset_low: u8,
    address_header: [u8; 5],
    extra: [u8; 4],
) -> [u8; SPECIFIC_BLOCK_LEN] {
    let mut out = [0u8; SPECIFIC_BLOCK_LEN];
    out[0] = offset_low;
    out[1] = offset_high;
    out[2] = category;
    out[3..8].copy_from_slice(&address_header);
    out[8..12].copy_from_slice(&extra);
    out
}
