use super::*;
use std::cell::RefCell;

/// Keeps contacts for the lifetime of the process only.
pub struct MemStorage {
    pub medium: String,
    data: RefCell<Vec<Contact>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(contacts),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_what_was_saved() -> Result<(), AppError> {
        let storage = MemStorage::new();
        assert!(storage.load()?.is_empty());

        let contacts = vec![Contact::new(
            "Jane Doe".to_string(),
            None,
            "5551234".to_string(),
        )];
        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        Ok(())
    }
}
