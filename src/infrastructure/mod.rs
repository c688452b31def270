pub mod embeddings;
pub mod memory;
pub mod redis;
pub mod store;
