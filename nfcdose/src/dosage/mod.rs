// nfcdose/src/dosage/mod.rs

//! Dosage readings and the snapshot produced by a reading session.

/// Field decoders for raw records and device-memory values.
pub mod decode;

use chrono::NaiveDateTime;

use crate::types::{DeviceId, FixedPoint};

/// Absolute time as rendered in CSV rows
pub const CSV_TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Reading id timestamp prefix
pub const ID_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Minute-resolution key used when merging readings
pub const MINUTE_KEY_FORMAT: &str = "%Y%m%d%H%M";

/// Column titles matching [`DosageReading::to_separated_string`].
pub const CSV_HEADER: [&str; 14] = [
    "Absolute Time",
    "Battery Voltage [V]",
    "Temperature [℃]",
    "Accumulated Counter",
    "Hp10 Dose value (every variable time) [uSv]",
    "Hp0.07 Dose value (every variable time) [uSv]",
    "BG correction Error",
    "CPU Error",
    "Temperature Error",
    "Battery voltage Error",
    "β sensor Error",
    "γ sensor Error",
    "Unequipped",
    "Impact",
];

/// Header row joined with `separator`.
pub fn csv_header(separator: &str) -> String {
    CSV_HEADER.join(separator)
}

/// Unit flag stored alongside a dose magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoseUnit {
    /// μSv
    #[default]
    MicroSievert,
    /// mSv
    MilliSievert,
}

/// Dose in micro-sievert with two decimals.
///
/// The unit is the one the device recorded; the value is already scaled,
/// so a milli-sievert record of magnitude 100 reads 5000.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoseValue {
    /// Value in μSv, two decimals
    pub micro_sievert: FixedPoint,
    /// Unit flag as recorded
    pub unit: DoseUnit,
}

impl std::fmt::Display for DoseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.micro_sievert.format_with(2))
    }
}

/// Error flags byte, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorFlags {
    /// BG補正
    pub bg_correction: bool,
    /// CPU
    pub cpu: bool,
    /// 温度
    pub temperature: bool,
    /// 電池電圧
    pub battery_voltage: bool,
    /// β線センサ
    pub beta_sensor: bool,
    /// γ線センサ
    pub gamma_sensor: bool,
    /// 未装着
    pub unequipped: bool,
    /// 衝撃
    pub impact: bool,
}

impl ErrorFlags {
    /// Split the flags byte, bit 7 first.
    pub fn from_byte(b: u8) -> Self {
        let bit = |n: u8| (b >> n) & 1 == 1;
        Self {
            bg_correction: bit(7),
            cpu: bit(6),
            temperature: bit(5),
            battery_voltage: bit(4),
            beta_sensor: bit(3),
            gamma_sensor: bit(2),
            unequipped: bit(1),
            impact: bit(0),
        }
    }

    /// Flags in byte order, bit 7 first
    pub fn to_array(&self) -> [bool; 8] {
        [
            self.bg_correction,
            self.cpu,
            self.temperature,
            self.battery_voltage,
            self.beta_sensor,
            self.gamma_sensor,
            self.unequipped,
            self.impact,
        ]
    }

    /// Whether any flag is raised.
    pub fn any(&self) -> bool {
        self.to_array().iter().any(|&f| f)
    }
}

/// One decoded measurement record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DosageReading {
    /// Timestamp (`%Y%m%d%H%M%S`) followed by the serial number
    pub id: String,
    /// Device id of the dosimeter
    pub serial_number: String,
    /// Measurement time, minute resolution
    pub time: NaiveDateTime,
    /// Volts, one decimal
    pub battery_voltage: FixedPoint,
    /// Degrees Celsius
    pub temperature: u8,
    /// 積算カウンタ
    pub accumulated_counter: u16,
    /// Hp(10)
    pub hp10: DoseValue,
    /// Hp(0.07)
    pub hp007: DoseValue,
    /// エラーフラグ
    pub error_flags: ErrorFlags,
}

impl DosageReading {
    /// Stamp the reading with the serial number of the device it came from.
    pub fn with_serial(mut self, serial: &DeviceId) -> Self {
        self.serial_number = serial.as_str().to_string();
        self.id = format!("{}{}", self.time.format(ID_TIME_FORMAT), self.serial_number);
        self
    }

    /// Readings sharing this key describe the same measurement.
    pub fn minute_key(&self) -> String {
        self.time.format(MINUTE_KEY_FORMAT).to_string()
    }

    /// CSV row in [`CSV_HEADER`] column order.
    pub fn to_separated_string(&self, separator: &str) -> String {
        let mut cols = vec![
            self.time.format(CSV_TIME_FORMAT).to_string(),
            self.battery_voltage.to_string(),
            self.temperature.to_string(),
            self.accumulated_counter.to_string(),
            self.hp10.to_string(),
            self.hp007.to_string(),
        ];
        cols.extend(
            self.error_flags
                .to_array()
                .iter()
                .map(|&f| u8::from(f).to_string()),
        );
        cols.join(separator)
    }
}

/// Everything one reading session produced. Only built on full success.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceSnapshot {
    /// 機器ID
    pub device_id: DeviceId,
    /// Hp(10) background, absent when read from NFC memory
    pub hp10_background: Option<FixedPoint>,
    /// Hp(0.07) background, absent when read from NFC memory
    pub hp007_background: Option<FixedPoint>,
    /// Readings in storage order
    pub readings: Vec<DosageReading>,
}
