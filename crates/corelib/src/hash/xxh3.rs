//! XXH3 hash truncated to 32 bits.

use crate::hash::traits::RingHash;
use xxhash_rust::xxh3::xxh3_64;

/// Low 32 bits of XXH3-64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Hash;

impl RingHash for Xxh3Hash {
    fn hash(&self, key: &str) -> u32 {
        xxh3_64(key.as_bytes()) as u32
    }

    fn name(&self) -> &'static str {
        "xxh3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xxh3_low_bits() {
        // XXH3-64 of the empty input is 0x2D06800538D394C2.
        assert_eq!(Xxh3Hash.hash(""), 0x38D3_94C2);
        assert_eq!(Xxh3Hash.hash("node-a0"), xxh3_64(b"node-a0") as u32);
    }
}
