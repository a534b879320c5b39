//! Consistent hash ring implementation.
//!
//! The ring keeps virtual-node positions in sorted order and answers lookups
//! with a nearest-successor binary search.

pub mod builder;
pub mod ring;

pub use builder::RingBuilder;
pub use ring::{HashRing, DEFAULT_REPLICAS};
