//! Property tests for ring lookups.

use corelib::RingBuilder;
use proptest::prelude::*;

fn node_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..6).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #[test]
    fn lookup_is_deterministic(nodes in node_names(), key in ".*", replicas in 1usize..32) {
        let ring = RingBuilder::new().with_replicas(replicas).add_nodes(&nodes).build();
        let first = ring.get(&key);
        prop_assert!(first.is_some());
        prop_assert_eq!(ring.get(&key), first);
    }

    #[test]
    fn lookup_returns_a_member(nodes in node_names(), keys in prop::collection::vec(".*", 1..50)) {
        let ring = RingBuilder::new().with_replicas(8).add_nodes(&nodes).build();
        for key in &keys {
            let node = ring.get(key).unwrap();
            prop_assert!(nodes.contains(&node));
        }
    }

    #[test]
    fn new_node_only_steals_keys(
        nodes in node_names(),
        keys in prop::collection::vec("[a-zA-Z0-9]{1,16}", 1..200),
    ) {
        let ring = RingBuilder::new().with_replicas(16).add_nodes(&nodes).build();
        let before: Vec<_> = keys.iter().map(|k| ring.get(k)).collect();
        ring.add_node("newcomer-node");
        for (key, old) in keys.iter().zip(before) {
            let new = ring.get(key);
            if new != old {
                prop_assert_eq!(new.as_deref(), Some("newcomer-node"));
            }
        }
    }

    #[test]
    fn add_then_remove_empties(node in "[a-z0-9]{1,12}", replicas in 1usize..64) {
        let ring = RingBuilder::new().with_replicas(replicas).build();
        ring.add_node(&node);
        prop_assert!(ring.is_exist(&node));
        ring.remove(&node);
        prop_assert!(ring.is_empty());
        prop_assert!(!ring.is_exist(&node));
    }
}
