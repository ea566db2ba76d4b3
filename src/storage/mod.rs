pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

/// Persistence medium for the contact book. Entries come back in the order
/// they were saved.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
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

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}'",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonStorage::new(path)?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_mediums() -> Result<(), AppError> {
        assert_eq!(StorageMediums::from("json")?, StorageMediums::Json);
        assert_eq!(StorageMediums::from(" MEM ")?, StorageMediums::Mem);
        assert!(StorageMediums::Mem.is_mem());
        assert!(!StorageMediums::Json.is_mem());
        assert_eq!(StorageMediums::Json.is_which(), "json");
        assert!(matches!(
            StorageMediums::from("txt"),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn builds_requested_medium() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("contacts.json");

        let json = parse_storage_type(StorageMediums::Json, &path.to_string_lossy())?;
        assert_eq!(json.get_medium(), "json");

        let mem = parse_storage_type(StorageMediums::Mem, "")?;
        assert_eq!(mem.get_medium(), "mem");
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/deeper/contacts.json");

        create_file_parent(&path.to_string_lossy())?;

        assert!(dir.path().join("nested/deeper").is_dir());
        Ok(())
    }
}
