pub mod embedder;
pub mod hash_store;
pub mod record_store;
