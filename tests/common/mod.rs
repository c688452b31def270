//! Shared test helpers.

use qavec::infrastructure::embeddings::word_table::WordTableEmbedder;
use qavec::infrastructure::memory::hash_store::MemoryHashStore;
use qavec::Qavec;
use std::sync::Arc;

/// Toy three-axis embedding space: each animal owns one axis, `kitten` sits
/// close to `cat`. Unknown words embed to zero and scale the average down,
/// which never changes cosine ordering.
pub fn test_embedder() -> WordTableEmbedder {
    WordTableEmbedder::from_pairs(
        vec![
            ("cat".to_string(), vec![1.0, 0.0, 0.0]),
            ("kitten".to_string(), vec![0.9, 0.1, 0.0]),
            ("dog".to_string(), vec![0.0, 1.0, 0.0]),
            ("fish".to_string(), vec![0.0, 0.0, 1.0]),
        ],
        3,
    )
    .unwrap()
}

pub fn setup() -> Qavec {
    Qavec::with_providers(Arc::new(test_embedder()), Arc::new(MemoryHashStore::new()))
}
