// nfcdose/src/reader/nfc_memory.rs

//! NFC memory: records stored in the tag's own sectors, read with plain
//! READ commands.

use log::{debug, info, warn};

use crate::dosage::{decode, DeviceSnapshot};
use crate::engine::Session;
use crate::protocol::{FieldKind, NfcCommand};
use crate::types::{MemoryAddress, RawDosageRecord, NFC_SECTOR_0, NFC_SECTOR_1};
use crate::utils::page_dump;
use crate::{Error, Result};

/// Read every record of one tag-memory region, retrying the whole region.
pub async fn read_region(
    session: &mut Session<'_>,
    region: MemoryAddress,
) -> Result<Vec<RawDosageRecord>> {
    let MemoryAddress::TagMemory { sector, .. } = region else {
        return Err(Error::FrameFormat(format!("{:?} is not tag memory", region)));
    };
    let attempts = session.config().max_attempts.max(1);
    for attempt in 1..=attempts {
        match read_region_once(session, sector, region.read_pages()).await {
            Ok(records) => return Ok(records),
            Err(e) if e.is_retryable() => {
                warn!("{:?}: attempt {}/{} failed: {}", region, attempt, attempts, e);
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::DeviceCommunication {
        message: String::new(),
    })
}

async fn read_region_once(
    session: &mut Session<'_>,
    sector: u8,
    pages: Vec<u8>,
) -> Result<Vec<RawDosageRecord>> {
    session.select_sector(sector).await?;

    let mut records = Vec::with_capacity(pages.len());
    for page in pages {
        let raw = session.request(&NfcCommand::Read { page }).await?;
        debug!("sector {} page dump:\n{}", sector, page_dump(page, &raw));
        records.push(RawDosageRecord::try_from(raw.as_slice())?);
    }
    Ok(records)
}

pub(crate) async fn read(session: &mut Session<'_>) -> Result<DeviceSnapshot> {
    let order = session.config().byte_order;

    let mut records = read_region(session, NFC_SECTOR_0).await?;
    records.extend(read_region(session, NFC_SECTOR_1).await?);
    info!("{} records from NFC memory", records.len());

    let device_id = decode::device_id(&session.read_field(FieldKind::DeviceId).await?);
    info!("device id: {}", device_id);

    let readings = records
        .iter()
        .map(|r| decode::decode_record(r, order).map(|d| d.with_serial(&device_id)))
        .collect::<Result<Vec<_>>>()?;

    Ok(DeviceSnapshot {
        device_id,
        hp10_background: None,
        hp007_background: None,
        readings,
    })
}
