// nfcdose/src/protocol/checksum.rs

//! CRC-32/MPEG-2 over frame blocks.

use crc::{CRC_32_MPEG_2, Crc};

/// CRC-32/MPEG-2: init 0xFFFFFFFF, poly 0x04C11DB7, MSB first, no final XOR.
/// Both CRC fields of a command/response frame use it.
pub const MPEG2: Crc<u32> = Crc::<u32>::new(&CRC_32_MPEG_2);

/// Compute the CRC-32/MPEG-2 of `data`.
pub fn crc32_mpeg2(data: &[u8]) -> u32 {
    MPEG2.checksum(data)
}

/// Compute the CRC over several slices as if they were concatenated.
pub fn crc32_mpeg2_parts(parts: &[&[u8]]) -> u32 {
    let mut digest = MPEG2.digest();
    for part in parts {
        digest.update(part);
    }
    digest.finalize()
}
