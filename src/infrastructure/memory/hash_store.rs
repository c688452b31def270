use crate::domain::error::DomainError;
use crate::domain::ports::hash_store::HashStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process hash store: nested maps behind a mutex. Backs the test suite
/// and any throwaway usage where durability does not matter.
#[derive(Default)]
pub struct MemoryHashStore {
    hashes: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl MemoryHashStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, HashMap<String, String>>>, DomainError> {
        self.hashes
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }
}

/// Glob support is exactly what the record namespace needs: a literal prefix
/// followed by `*`. Patterns without a trailing `*` match literally.
fn glob_match(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

#[async_trait]
impl HashStore for MemoryHashStore {
    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> Result<(), DomainError> {
        if fields.is_empty() {
            // Match the Redis adapter: an empty write creates nothing.
            return Ok(());
        }
        let mut hashes = self.lock()?;
        let hash = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn fields(&self, key: &str) -> Result<HashMap<String, String>, DomainError> {
        let hashes = self.lock()?;
        Ok(hashes.get(key).cloned().unwrap_or_default())
    }

    async fn field(&self, key: &str, field: &str) -> Result<Option<String>, DomainError> {
        let hashes = self.lock()?;
        Ok(hashes.get(key).and_then(|hash| hash.get(field).cloned()))
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let mut hashes = self.lock()?;
        hashes.remove(key);
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let hashes = self.lock()?;
        Ok(hashes
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_prefix_match() {
        assert!(glob_match("qa:*", "qa:What is Rust?"));
        assert!(glob_match("qa:*", "qa:What is Rust?:vector"));
        assert!(!glob_match("qa:*", "session:abc"));
    }

    #[test]
    fn test_glob_literal_match() {
        assert!(glob_match("qa:x", "qa:x"));
        assert!(!glob_match("qa:x", "qa:xy"));
    }
}
