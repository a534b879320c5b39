//! SipHash-1-3 truncated to 32 bits.

use crate::hash::traits::RingHash;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Low 32 bits of SipHash-1-3 with zero keys.
///
/// Bytes are written raw (no length prefix), so the output only depends on
/// the key's UTF-8 encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash13;

impl RingHash for SipHash13 {
    fn hash(&self, key: &str) -> u32 {
        let mut hasher = SipHasher13::new();
        hasher.write(key.as_bytes());
        hasher.finish() as u32
    }

    fn name(&self) -> &'static str {
        "sip13"
    }
}
