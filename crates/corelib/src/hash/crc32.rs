//! CRC-32 (IEEE) hash, the ring's default.

use crate::hash::traits::RingHash;

/// IEEE CRC-32 over the raw UTF-8 bytes of the key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32Hash;

impl RingHash for Crc32Hash {
    fn hash(&self, key: &str) -> u32 {
        crc32fast::hash(key.as_bytes())
    }

    fn name(&self) -> &'static str {
        "crc32"
    }
}
