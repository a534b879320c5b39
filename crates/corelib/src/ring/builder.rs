//! Builder for configuring a `HashRing`.

use crate::config::RingConfig;
use crate::hash::{default_hash, HashKind, RingHash};
use crate::ring::ring::{HashRing, DEFAULT_REPLICAS};
use std::sync::Arc;

/// Collects ring options, then builds an empty or pre-populated ring.
///
/// Unset options fall back to defaults: `DEFAULT_REPLICAS` vnodes per node
/// and CRC-32 hashing. A replica count of zero also means "use the default".
///
/// ```rust
/// use corelib::{HashKind, RingBuilder};
///
/// let ring = RingBuilder::new()
///     .with_replicas(3)
///     .with_hash_kind(HashKind::Xxh3)
///     .add_nodes(["n1", "n2"])
///     .build();
/// assert_eq!(ring.position_count(), 6);
/// ```
#[derive(Default)]
pub struct RingBuilder {
    replicas: usize,
    hash: Option<Arc<dyn RingHash>>,
    nodes: Vec<String>,
}

impl RingBuilder {
    /// Starts with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a parsed config: replicas, hash, and initial nodes.
    pub fn from_config(config: &RingConfig) -> Self {
        Self::new()
            .with_replicas(config.replicas)
            .with_hash_kind(config.hash)
            .add_nodes(config.nodes.iter())
    }

    /// Sets the vnode count per node. Zero restores the default.
    pub fn with_replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    /// Uses a custom hash (any `RingHash`, including plain functions).
    pub fn with_hash<H: RingHash>(mut self, hash: H) -> Self {
        self.hash = Some(Arc::new(hash));
        self
    }

    /// Uses an already shared hash.
    pub fn with_shared_hash(mut self, hash: Arc<dyn RingHash>) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Uses one of the built-in hashes.
    pub fn with_hash_kind(mut self, kind: HashKind) -> Self {
        self.hash = Some(kind.build());
        self
    }

    /// Queues a node to place when the ring is built.
    pub fn add_node(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Queues several nodes, placed in iteration order.
    pub fn add_nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nodes
            .extend(nodes.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Resolves defaults and places the queued nodes in one batch.
    pub fn build(self) -> HashRing {
        let replicas = if self.replicas == 0 {
            DEFAULT_REPLICAS
        } else {
            self.replicas
        };
        let hash = self.hash.unwrap_or_else(default_hash);
        let ring = HashRing::with_parts(replicas, hash);
        if !self.nodes.is_empty() {
            ring.add(&self.nodes);
        }
        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_replicas_means_default() {
        let ring = RingBuilder::new().with_replicas(0).build();
        assert_eq!(ring.replicas(), DEFAULT_REPLICAS);
    }

    #[test]
    fn test_builder_prepopulates() {
        let ring = RingBuilder::new()
            .with_replicas(4)
            .add_node("node1")
            .add_nodes(vec!["node2", "node3"])
            .build();
        assert_eq!(ring.position_count(), 12);
        assert_eq!(ring.nodes().len(), 3);
    }

    #[test]
    fn test_from_config() {
        let config = RingConfig {
            replicas: 2,
            hash: HashKind::Sip13,
            nodes: vec!["a".into(), "b".into()],
        };
        let ring = RingBuilder::from_config(&config).build();
        assert_eq!(ring.replicas(), 2);
        assert_eq!(ring.hash_name(), "sip13");
        assert_eq!(ring.nodes(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_shared_hash_agrees_on_placement() {
        let hash: Arc<dyn RingHash> = HashKind::Xxh3.build();
        let first = RingBuilder::new()
            .with_shared_hash(Arc::clone(&hash))
            .add_nodes(["n1", "n2", "n3"])
            .build();
        let second = RingBuilder::new()
            .with_shared_hash(hash)
            .add_nodes(["n3", "n1", "n2"])
            .build();
        assert_eq!(second.hash_name(), "xxh3");
        assert_eq!(first.positions(), second.positions());
        for i in 0..500 {
            let key = format!("key-{}", i);
            assert_eq!(first.get(&key), second.get(&key));
        }
    }

    #[test]
    fn test_custom_hash_closure() {
        let ring = RingBuilder::new()
            .with_replicas(1)
            .with_hash(|_: &str| 7u32)
            .add_node("only")
            .build();
        assert_eq!(ring.hash_name(), "custom");
        assert_eq!(ring.positions(), vec![(7, "only".to_string())]);
    }
}
