// nfcdose/src/dosage/decode.rs

//! Bit-exact decoders for the packed fields of a dosage record and the
//! device-memory scalar fields.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use log::trace;

use crate::constants::MAX_PAGE_COUNT;
use crate::dosage::{DoseUnit, DoseValue, DosageReading, ErrorFlags, ID_TIME_FORMAT};
use crate::protocol::parser;
use crate::types::{ByteOrder, DeviceId, FixedPoint, RawDosageRecord};
use crate::{Error, Result};

/// Byte ranges inside a 13-byte record
const TIME: usize = 0;
const BATTERY: usize = 4;
const TEMPERATURE: usize = 5;
const COUNTER: usize = 6;
const HP10: usize = 8;
const HP007: usize = 10;
const ERROR_FLAGS: usize = 12;

const MILLI_SIEVERT_FLAG: u16 = 0x8000;
const DOSE_MAGNITUDE: u16 = 0x7FFF;

/// Background values are stored in units of 1e-5
const BACKGROUND_SCALE: u32 = 5;

/// Calendar fields as packed by the device, before any range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedTime {
    /// Full year, 2000-based
    pub year: u32,
    /// 1-based; 0 and 13+ roll over
    pub month: u32,
    /// Day of month; 0 is the last day of the previous month
    pub day: u32,
    /// 0..=23 before rollover
    pub hour: u32,
    /// 0..=59 before rollover
    pub minute: u32,
}

impl PackedTime {
    /// Unpack the four time bytes. `order` decides which byte is `b0`.
    pub fn unpack(bytes: [u8; 4], order: ByteOrder) -> Self {
        let [b0, b1, b2, b3] = match order {
            ByteOrder::LittleEndian => bytes,
            ByteOrder::BigEndian => [bytes[3], bytes[2], bytes[1], bytes[0]],
        };
        let (b0, b1, b2, b3) = (b0 as u32, b1 as u32, b2 as u32, b3 as u32);

        let minute = ((b0 & 0x7F) >> 4) * 10 + (b0 & 0x0F);
        let hour = ((b1 & 0x18) >> 3) * 10 + ((b0 >> 7) | ((b1 & 0x07) << 1));
        let day = ((b2 & 0x06) >> 1) * 10 + ((((b1 >> 1) | ((b2 & 0x01) << 7)) & 0xFF) >> 4);
        let month = (b2 >> 7) * 10 + ((b2 & 0x78) >> 3);
        let year = 2000 + (b3 >> 4) * 10 + (b3 & 0x0F);
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Compose a date-time, rolling out-of-range fields over into the next
    /// larger unit. Month 0 is December of the previous year and day 0 the
    /// last day of the previous month.
    pub fn to_datetime_lenient(self) -> Result<NaiveDateTime> {
        self.compose().ok_or_else(|| {
            Error::InvalidTimestamp(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute
            ))
        })
    }

    fn compose(self) -> Option<NaiveDateTime> {
        let jan1 = NaiveDate::from_ymd_opt(self.year as i32, 1, 1)?;
        let first_of_month = match self.month {
            0 => jan1.checked_sub_months(Months::new(1))?,
            m => jan1.checked_add_months(Months::new(m - 1))?,
        };
        let date = first_of_month.checked_add_signed(Duration::days(self.day as i64 - 1))?;
        date.and_hms_opt(0, 0, 0)?.checked_add_signed(
            Duration::hours(self.hour as i64) + Duration::minutes(self.minute as i64),
        )
    }
}

/// Absolute time from the four packed BCD bytes.
pub fn abs_time(bytes: &[u8], order: ByteOrder) -> Result<NaiveDateTime> {
    let raw = parser::array_at::<4>(bytes, 0)?;
    let packed = PackedTime::unpack(raw, order);
    trace!("packed time {:?}", packed);
    packed.to_datetime_lenient()
}

/// Battery voltage: raw / 10, one decimal.
pub fn battery_voltage(raw: u8) -> FixedPoint {
    FixedPoint::new(raw as u64, 1)
}

/// Temperature in degrees Celsius.
pub fn temperature(raw: u8) -> u8 {
    raw
}

/// Accumulated counter, a u16 in the configured order.
pub fn accumulated_counter(bytes: &[u8], order: ByteOrder) -> Result<u16> {
    Ok(order.u16_from(parser::array_at::<2>(bytes, 0)?))
}

/// Dose: bit 15 flags milli-sievert, the low 15 bits are the magnitude in
/// units of 1/20. Milli-sievert values are scaled by 1000.
pub fn dose_value(bytes: &[u8], order: ByteOrder) -> Result<DoseValue> {
    let raw = order.u16_from(parser::array_at::<2>(bytes, 0)?);
    let magnitude = (raw & DOSE_MAGNITUDE) as u64;
    // floor(magnitude / 20) at two decimals is exactly magnitude * 5 hundredths
    let hundredths = magnitude * 5;
    let (hundredths, unit) = if raw & MILLI_SIEVERT_FLAG != 0 {
        (hundredths * 1000, DoseUnit::MilliSievert)
    } else {
        (hundredths, DoseUnit::MicroSievert)
    };
    Ok(DoseValue {
        micro_sievert: FixedPoint::new(hundredths, 2),
        unit,
    })
}

/// Error flags byte, most significant bit first.
pub fn error_flags(raw: u8) -> ErrorFlags {
    ErrorFlags::from_byte(raw)
}

/// Device id: trailing zero bytes dropped, byte order reversed, decoded as
/// UTF-8 and left-padded with '0' to eight characters.
pub fn device_id(bytes: &[u8]) -> DeviceId {
    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i + 1);
    let reversed: Vec<u8> = bytes[..end].iter().rev().copied().collect();
    let text = String::from_utf8_lossy(&reversed);
    DeviceId::new(format!("{:0>8}", text))
}

/// Background value: u32 / 100000, five decimals.
pub fn background_value(bytes: &[u8], order: ByteOrder) -> Result<FixedPoint> {
    let raw = order.u32_from(parser::array_at::<4>(bytes, 0)?);
    Ok(FixedPoint::new(raw as u64, BACKGROUND_SCALE))
}

/// Number of stored trend pages: the stored value plus one.
///
/// Counts beyond the 12-bit page address space are rejected.
pub fn page_count(bytes: &[u8], order: ByteOrder) -> Result<u32> {
    let raw = order.u32_from(parser::array_at::<4>(bytes, 0)?);
    let count = raw.saturating_add(1);
    if count > MAX_PAGE_COUNT {
        return Err(Error::InvalidPageCount(count));
    }
    Ok(count)
}

/// Decode a full record. The serial number is left empty; readers stamp
/// it with [`DosageReading::with_serial`].
pub fn decode_record(record: &RawDosageRecord, order: ByteOrder) -> Result<DosageReading> {
    let b = record.as_bytes();
    let time = abs_time(&b[TIME..BATTERY], order)?;
    Ok(DosageReading {
        id: time.format(ID_TIME_FORMAT).to_string(),
        serial_number: String::new(),
        time,
        battery_voltage: battery_voltage(b[BATTERY]),
        temperature: temperature(b[TEMPERATURE]),
        accumulated_counter: accumulated_counter(&b[COUNTER..HP10], order)?,
        hp10: dose_value(&b[HP10..HP007], order)?,
        hp007: dose_value(&b[HP007..ERROR_FLAGS], order)?,
        error_flags: error_flags(b[ERROR_FLAGS]),
    })
}
