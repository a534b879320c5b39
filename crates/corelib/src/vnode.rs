//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Each logical node is placed on the ring `replicas` times. Virtual node `i`
//! of node `N` sits at `hash(N || i)`, where `i` is written in decimal:
//! node `"A"`, replica `2` hashes the string `"A2"`. Any process that wants
//! to agree on placement must use this exact derivation and the same hash.
//!
//! More vnodes per node smooth the key distribution; they never change which
//! keys move when membership changes, only how evenly they spread.
//!
//! # Performance Characteristics
//!
//! - **Memory**: O(v) positions per node, v = replicas
//! - **Lookup**: O(log n) where n = total positions
//! - **Rebalancing**: roughly k/N keys move when one of N nodes joins/leaves

use crate::hash::RingHash;

/// Builds the string hashed for virtual node `index` of `node`.
///
/// ```rust
/// assert_eq!(corelib::vnode::vnode_key("A", 2), "A2");
/// ```
pub fn vnode_key(node: &str, index: usize) -> String {
    format!("{}{}", node, index)
}

/// A virtual node on the hash ring.
///
/// Only the position and replica index are kept; the owning name lives in
/// the ring's position map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// Position on the 32-bit ring.
    pub position: u32,
    /// Replica index within the logical node, in `[0, replicas)`.
    pub index: usize,
}

impl VirtualNode {
    /// Derives virtual node `index` of `node` under `hash`.
    pub fn derive(hash: &dyn RingHash, node: &str, index: usize) -> Self {
        Self {
            position: hash.hash(&vnode_key(node, index)),
            index,
        }
    }

    /// All `replicas` virtual nodes of `node`, in index order.
    ///
    /// Colliding positions are not deduplicated.
    pub fn all<'a>(
        hash: &'a dyn RingHash,
        node: &'a str,
        replicas: usize,
    ) -> impl Iterator<Item = VirtualNode> + 'a {
        (0..replicas).map(move |index| Self::derive(hash, node, index))
    }

    /// Clockwise distance from this vnode to `other`, wrapping past `u32::MAX`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u32 {
        other.position.wrapping_sub(self.position)
    }
}
