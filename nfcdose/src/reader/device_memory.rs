// nfcdose/src/reader/device_memory.rs

//! Device memory: scalar fields followed by the paged trend data, all
//! relayed by the microcontroller through the SRAM window.

use log::{debug, info};

use crate::constants::{RECORD_LEN, SLOTS_PER_PAGE};
use crate::dosage::{decode, DeviceSnapshot};
use crate::engine::Session;
use crate::protocol::FieldKind;
use crate::types::RawDosageRecord;
use crate::Result;

/// Split the concatenated trend payloads into records.
///
/// Stops at the first all-0xFF record; a trailing partial chunk is dropped.
pub fn split_records(stream: &[u8]) -> Vec<RawDosageRecord> {
    stream
        .chunks_exact(RECORD_LEN)
        .filter_map(|chunk| RawDosageRecord::try_from(chunk).ok())
        .take_while(|r| !r.is_sentinel())
        .collect()
}

pub(crate) async fn read(session: &mut Session<'_>) -> Result<DeviceSnapshot> {
    let order = session.config().byte_order;

    let device_id = decode::device_id(&session.read_field(FieldKind::DeviceId).await?);
    info!("device id: {}", device_id);

    let pages = decode::page_count(&session.read_field(FieldKind::PageCount).await?, order)?;
    info!("trend pages: {}", pages);

    let hp10_background =
        decode::background_value(&session.read_field(FieldKind::Hp10Background).await?, order)?;
    info!("hp10 background: {}", hp10_background);

    let hp007_background =
        decode::background_value(&session.read_field(FieldKind::Hp007Background).await?, order)?;
    info!("hp0.07 background: {}", hp007_background);

    let mut stream = Vec::new();
    for page in 0..pages {
        for slot in 0..SLOTS_PER_PAGE {
            let kind = FieldKind::trend(page, slot)?;
            stream.extend(session.read_field(kind).await?);
        }
        debug!("trend page {}/{} read, {} bytes so far", page + 1, pages, stream.len());
    }

    let readings = split_records(&stream)
        .iter()
        .map(|r| decode::decode_record(r, order).map(|d| d.with_serial(&device_id)))
        .collect::<Result<Vec<_>>>()?;
    info!("{} readings from device memory", readings.len());

    Ok(DeviceSnapshot {
        device_id,
        hp10_background: Some(hp10_background),
        hp007_background: Some(hp007_background),
        readings,
    })
}
