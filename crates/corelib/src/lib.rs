//! Core library for consistent hashing.
//!
//! This crate maps arbitrary keys onto a dynamic set of named nodes so that
//! membership changes only remap a small share of keys:
//! - Pluggable 32-bit hashes (CRC-32 by default)
//! - Virtual node placement
//! - A thread-safe ring with nearest-successor lookup
//! - JSON ring configuration

pub mod config;
pub mod error;
pub mod hash;
pub mod ring;
pub mod vnode;

pub use config::RingConfig;
pub use error::{Error, Result};
pub use hash::{HashKind, RingHash};
pub use ring::{HashRing, RingBuilder, DEFAULT_REPLICAS};
pub use vnode::VirtualNode;
