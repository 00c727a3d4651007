pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::prelude::AppError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Key the contact list is stored under.
pub const CONTACTS_KEY: &str = "contact-list";

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/local_storage.json";

/// String key-value storage, the shape of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

/// Either backend behind one type, so the binary can pick at runtime.
pub enum Storage {
    Json(FileStorage),
    Mem(MemoryStorage),
}

impl Storage {
    pub fn open(medium: StorageMediums, path: &str) -> Result<Self, AppError> {
        match medium {
            StorageMediums::Json => Ok(Storage::Json(FileStorage::new(path)?)),
            StorageMediums::Mem => Ok(Storage::Mem(MemoryStorage::new())),
        }
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match self {
            Storage::Json(s) => s.get(key),
            Storage::Mem(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            Storage::Json(s) => s.set(key, value),
            Storage::Mem(s) => s.set(key, value),
        }
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
