use super::*;

/// In-process storage. Counts writes so callers can check when a save happened.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub data: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.data.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.data.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
