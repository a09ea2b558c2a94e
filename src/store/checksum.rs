//! CRC32 checksum over the serialized student list
//!
//! Uses CRC32 (IEEE polynomial). Any mismatch on load is reported as a
//! corrupted store and the file is not used.

use crc32fast::Hasher;

/// Computes a CRC32 checksum over the provided data.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
