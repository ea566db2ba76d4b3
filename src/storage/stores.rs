use super::*;

use crate::prelude::ContactRecord;
use serde_json::{Map, Value};

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Result<Self, AppError> {
        if path.trim().is_empty() {
            return Err(AppError::Validation(
                "Storage path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            medium: "json".to_string(),
            path: path.to_string(),
        })
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            log::debug!("No contact file at {}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value =
            serde_json::from_str(&data).map_err(|e| AppError::StorageParse(e.to_string()))?;

        let Value::Object(entries) = value else {
            return Err(AppError::StorageParse(
                "expected an object keyed by full name".to_string(),
            ));
        };

        let mut contacts = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            // A bad entry is dropped on its own, the rest of the book still loads
            match serde_json::from_value::<ContactRecord>(entry) {
                Ok(record) => contacts.push(Contact::from_record(name, record)),
                Err(e) => log::warn!("Skipping unreadable contact '{}': {}", name, e),
            }
        }

        log::info!("Loaded {} contacts from {}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(&self.path)?;
        }

        let mut entries = Map::with_capacity(contacts.len());
        for contact in contacts {
            entries.insert(
                contact.name.clone(),
                serde_json::to_value(contact.to_record())?,
            );
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let json_contacts = serde_json::to_string_pretty(&Value::Object(entries))?;
        file.write_all(json_contacts.as_bytes())?;

        log::debug!("Saved {} contacts to {}", contacts.len(), self.path);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
