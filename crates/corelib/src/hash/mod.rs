//! Pluggable hash functions for ring placement.
//!
//! A hash turns both virtual-node keys and lookup keys into positions on the
//! 32-bit ring. The ring treats it as a black box.

pub mod crc32;
pub mod sip;
pub mod traits;
pub mod xxh3;

pub use crc32::Crc32Hash;
pub use sip::SipHash13;
pub use traits::RingHash;
pub use xxh3::Xxh3Hash;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Named built-in hash algorithms, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    /// IEEE CRC-32 (default).
    #[default]
    Crc32,
    /// XXH3-64, low 32 bits.
    Xxh3,
    /// SipHash-1-3, low 32 bits.
    Sip13,
}

impl HashKind {
    /// Instantiates the hash this kind names.
    pub fn build(self) -> Arc<dyn RingHash> {
        match self {
            HashKind::Crc32 => Arc::new(Crc32Hash),
            HashKind::Xxh3 => Arc::new(Xxh3Hash),
            HashKind::Sip13 => Arc::new(SipHash13),
        }
    }

    /// Config/CLI name of this hash.
    pub fn as_str(self) -> &'static str {
        match self {
            HashKind::Crc32 => "crc32",
            HashKind::Xxh3 => "xxh3",
            HashKind::Sip13 => "sip13",
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crc32" => Ok(HashKind::Crc32),
            "xxh3" => Ok(HashKind::Xxh3),
            "sip13" | "siphash13" => Ok(HashKind::Sip13),
            _ => Err(Error::UnknownHash(s.to_string())),
        }
    }
}

/// The hash used when none is configured.
pub fn default_hash() -> Arc<dyn RingHash> {
    HashKind::default().build()
}
