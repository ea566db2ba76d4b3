use super::*;

use crate::domain::contact::{
    NaiveDate, ValidationReq, contact_key, parse_birthday, validate_phone,
};
use crate::storage::ContactStore;

pub const NO_CONTACTS: &str = "No contacts found.";

/// Reference contacts installed by the `seed` migration: name, surname and
/// birthday as (year, month, day).
pub const SEED_CONTACTS: [(&str, &str, (i32, u32, u32)); 5] = [
    ("John", "Forbes Nash Jr.", (1928, 6, 13)),
    ("Andrew", "Wiles", (1953, 4, 11)),
    ("Guido", "van Rossum", (1956, 1, 31)),
    ("Satya", "Nadella", (1967, 8, 19)),
    ("Demis", "Hassabis", (1976, 7, 27)),
];

pub struct ContactManager {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Builds a manager and fills it from its storage medium.
    pub fn open(storage: Box<dyn ContactStore>) -> Self {
        let mut manager = Self::new(storage);
        manager.load();
        manager
    }

    /// Replaces the in-memory contacts with the persisted ones. Unreadable
    /// data is reported and leaves the book empty.
    pub fn load(&mut self) -> &[Contact] {
        match self.storage.load() {
            Ok(contacts) => self.mem = contacts,
            Err(e) => {
                log::warn!(
                    "Discarding unreadable {} contact data: {}",
                    self.storage.get_medium(),
                    e
                );
                eprintln!("Error: {}", e);
                self.mem = Vec::new();
            }
        }
        &self.mem
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    /// Persists `contacts` and only then makes them the in-memory book, so a
    /// failed save leaves the book as it was.
    fn commit(&mut self, contacts: Vec<Contact>) -> Result<(), AppError> {
        self.storage.save(&contacts)?;
        self.mem = contacts;
        Ok(())
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    fn get_index_by_key(&self, key: &str) -> Option<usize> {
        self.mem.iter().position(|c| c.name == key)
    }

    pub fn contains(&self, name: &str, surname: &str) -> Result<bool, AppError> {
        let key = contact_key(name, surname)?;
        Ok(self.get_index_by_key(&key).is_some())
    }

    /// Inserts or overwrites the contact and persists the book. Returns the
    /// key the contact is stored under.
    pub fn add_contact(
        &mut self,
        name: &str,
        surname: &str,
        birthday: &str,
        phone: &str,
    ) -> Result<String, AppError> {
        let key = contact_key(name, surname)?;
        let birthday = parse_birthday(birthday)?;

        if !validate_phone(phone)? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        let contact = Contact::new(key.clone(), Some(birthday), phone.to_string());

        // Overwrites keep the original position
        let mut candidate = self.mem.clone();
        match self.get_index_by_key(&key) {
            Some(index) => candidate[index] = contact,
            None => candidate.push(contact),
        }

        self.commit(candidate)?;
        log::info!("Stored contact {}", key);
        Ok(key)
    }

    pub fn change_contact(
        &mut self,
        name: &str,
        surname: &str,
        new_phone: &str,
    ) -> Result<String, AppError> {
        let key = contact_key(name, surname)?;

        let Some(index) = self.get_index_by_key(&key) else {
            return Err(AppError::NotFound(format!("Contact '{}'", key)));
        };

        if !validate_phone(new_phone)? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        let mut candidate = self.mem.clone();
        candidate[index].phone = new_phone.to_string();

        self.commit(candidate)?;
        log::info!("Updated phone of {}", key);
        Ok(key)
    }

    pub fn find_contact(&self, name: &str, surname: &str) -> Result<&Contact, AppError> {
        let key = contact_key(name, surname)?;

        self.get_index_by_key(&key)
            .map(|index| &self.mem[index])
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", key)))
    }

    pub fn list_contacts(&self) -> Vec<String> {
        if self.mem.is_empty() {
            return vec![NO_CONTACTS.to_string()];
        }

        self.mem.iter().map(Contact::display_line).collect()
    }

    /// One-time migration installing the reference contacts. Keys already in
    /// the book are left untouched.
    pub fn seed_defaults(&mut self) -> Result<usize, AppError> {
        let mut candidate = self.mem.clone();
        let mut inserted = 0;

        for (name, surname, (year, month, day)) in SEED_CONTACTS {
            let key = contact_key(name, surname)?;
            if self.get_index_by_key(&key).is_some() {
                continue;
            }

            let birthday = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| AppError::Validation(ValidationReq::birthday_req()))?;

            candidate.push(Contact::new(key, Some(birthday), String::new()));
            inserted += 1;
        }

        if inserted > 0 {
            self.commit(candidate)?;
            log::info!("Seeded {} reference contacts", inserted);
        }
        Ok(inserted)
    }
}
