//! Core hash trait definitions.

/// A hash maps an arbitrary string to a position on the 32-bit ring.
///
/// The ring only relies on determinism: the same input must produce the same
/// output for the lifetime of the ring. Distribution quality is the
/// implementation's business.
pub trait RingHash: Send + Sync + 'static {
    /// Hashes `key` to a ring position.
    fn hash(&self, key: &str) -> u32;

    /// Returns the name of this hash (for logging/debugging).
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> RingHash for F
where
    F: Fn(&str) -> u32 + Send + Sync + 'static,
{
    fn hash(&self, key: &str) -> u32 {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_ring_hash() {
        let hash = |key: &str| key.len() as u32;
        assert_eq!(RingHash::hash(&hash, "abcd"), 4);
        assert_eq!(RingHash::name(&hash), "custom");
    }
}
