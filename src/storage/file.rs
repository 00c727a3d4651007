use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};

/// Keeps every key in one JSON object on disk.
pub struct FileStorage {
    pub path: String,
}

impl FileStorage {
    pub fn new(path: &str) -> Result<Self, AppError> {
        create_file_parent(path)?;

        Ok(Self {
            path: path.to_string(),
        })
    }

    fn read_all(&self) -> Result<HashMap<String, String>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(HashMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&data)?)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut entries = self.read_all()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        // An unreadable file is replaced rather than blocking every later save.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        create_file_parent(&self.path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serde_json::to_string(&entries)?;
        file.write_all(data.as_bytes())?;

        Ok(())
    }
}
