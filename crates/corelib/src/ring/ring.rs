//! Hash ring data structure.
//!
//! Positions live in two structures kept in lock-step: a sorted `Vec<u32>`
//! for binary search and a `HashMap<u32, name>` resolving a position to its
//! logical node. Both sit behind one `RwLock`, so readers always see a sorted
//! index that agrees with the map.

use crate::hash::RingHash;
use crate::vnode::VirtualNode;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Virtual nodes per logical node when none is configured.
pub const DEFAULT_REPLICAS: usize = 1 << 7;

#[derive(Debug, Default)]
struct RingState {
    /// Ascending. May hold duplicates after a node is added twice.
    positions: Vec<u32>,
    /// Position -> owning node. Last write wins on collisions.
    owners: HashMap<u32, Arc<str>>,
}

impl RingState {
    /// Re-derives `positions` from the surviving keys of `owners`.
    fn rebuild_positions(&mut self) {
        self.positions = self.owners.keys().copied().collect();
        self.positions.sort_unstable();
    }

    /// Nearest successor of `hash`, wrapping to the smallest position.
    fn successor(&self, hash: u32) -> Option<u32> {
        if self.positions.is_empty() {
            return None;
        }
        let idx = self.positions.partition_point(|&p| p < hash);
        let idx = if idx == self.positions.len() { 0 } else { idx };
        Some(self.positions[idx])
    }
}

/// Consistent hash ring mapping keys to named nodes.
///
/// All methods take `&self`; share the ring across threads with `Arc`.
/// Lookups run concurrently with each other and are serialized against
/// `add`/`remove`. Each call is atomic, sequences of calls are not.
///
/// # Example
///
/// ```rust
/// use corelib::HashRing;
///
/// let ring = HashRing::new();
/// ring.add(["10.0.0.1", "10.0.0.2"]);
/// let node = ring.get("user42").unwrap();
/// assert!(node == "10.0.0.1" || node == "10.0.0.2");
/// ```
pub struct HashRing {
    hash: Arc<dyn RingHash>,
    replicas: usize,
    state: RwLock<RingState>,
}

impl HashRing {
    /// Creates an empty ring with the default replica count and CRC-32 hash.
    pub fn new() -> Self {
        super::RingBuilder::new().build()
    }

    pub(crate) fn with_parts(replicas: usize, hash: Arc<dyn RingHash>) -> Self {
        debug_assert!(replicas > 0);
        Self {
            hash,
            replicas,
            state: RwLock::new(RingState::default()),
        }
    }

    /// Number of virtual nodes placed per logical node.
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Name of the hash in use.
    pub fn hash_name(&self) -> &'static str {
        self.hash.name()
    }

    /// True iff no positions are placed.
    pub fn is_empty(&self) -> bool {
        self.state.read().positions.is_empty()
    }

    /// Cheap membership probe: checks whether vnode 0 of `node` is on the ring.
    ///
    /// Does not verify the node's other vnodes. A collision with another
    /// node's vnode can make this report a node that was never added.
    pub fn is_exist(&self, node: &str) -> bool {
        let probe = VirtualNode::derive(self.hash.as_ref(), node, 0);
        self.state.read().owners.contains_key(&probe.position)
    }

    /// Places every node in `nodes` on the ring.
    ///
    /// The whole batch runs under one write lock, so readers see either none
    /// or all of it. Re-adding a name re-inserts identical positions: the map
    /// is unchanged but the sorted index gains duplicates, which resolve to
    /// the same node. If two names collide on a position, the one placed last
    /// owns it.
    pub fn add<I, S>(&self, nodes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = self.state.write();
        for node in nodes {
            let node = node.as_ref();
            let name: Arc<str> = Arc::from(node);
            for vnode in VirtualNode::all(self.hash.as_ref(), node, self.replicas) {
                state.positions.push(vnode.position);
                state.owners.insert(vnode.position, Arc::clone(&name));
            }
            debug!(node, replicas = self.replicas, "added node to ring");
        }
        state.positions.sort_unstable();
        debug!(positions = state.positions.len(), "ring positions sorted");
    }

    /// Places a single node on the ring.
    pub fn add_node(&self, node: &str) {
        self.add([node]);
    }

    /// Removes the positions derived from `node`.
    ///
    /// Removing an absent node leaves the mapping untouched. Positions this
    /// node shares with another node through a collision are dropped too.
    pub fn remove(&self, node: &str) {
        let mut state = self.state.write();
        let mut removed = 0usize;
        for vnode in VirtualNode::all(self.hash.as_ref(), node, self.replicas) {
            if state.owners.remove(&vnode.position).is_some() {
                removed += 1;
            }
        }
        state.rebuild_positions();
        debug!(
            node,
            removed,
            positions = state.positions.len(),
            "removed node from ring"
        );
    }

    /// Finds the node owning `key`: the first position at or after
    /// `hash(key)`, wrapping to the smallest position.
    ///
    /// Returns `None` only when the ring is empty.
    pub fn get(&self, key: &str) -> Option<String> {
        let hash = self.hash.hash(key);
        let state = self.state.read();
        let position = state.successor(hash)?;
        let owner = state.owners.get(&position)?;
        trace!(key, hash, position, node = %owner, "ring lookup");
        Some(owner.to_string())
    }

    /// Length of the sorted position index, duplicates included.
    pub fn position_count(&self) -> usize {
        self.state.read().positions.len()
    }

    /// Distinct logical nodes currently owning at least one position, sorted.
    pub fn nodes(&self) -> Vec<String> {
        let state = self.state.read();
        state
            .owners
            .values()
            .map(|name| &**name)
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Snapshot of `(position, node)` pairs in ring order.
    pub fn positions(&self) -> Vec<(u32, String)> {
        let state = self.state.read();
        state
            .positions
            .iter()
            .filter_map(|p| state.owners.get(p).map(|name| (*p, name.to_string())))
            .collect()
    }
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("hash", &self.hash.name())
            .field("replicas", &self.replicas)
            .field("positions", &state.positions.len())
            .field("owners", &state.owners.len())
            .finish()
    }
}
