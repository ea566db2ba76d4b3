use super::*;
pub use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const NOT_AVAILABLE: &str = "Not available";

/// A single entry of the contact book. `name` is the normalized key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub phone: String,
}

/// On-disk shape of a contact: the value stored under its full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(
        default,
        serialize_with = "serialize_birthday",
        deserialize_with = "deserialize_birthday"
    )]
    pub birthday: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_phone")] // Missing or null reads as unset.
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name and surname must not be empty".to_string()
    }

    pub fn birthday_req() -> String {
        "Invalid date format. Please enter the date in the format DD/MM/YYYY.".to_string()
    }

    pub fn phone_req() -> String {
        "Phone number should contain only digits.".to_string()
    }
}

impl Contact {
    pub fn new(name: String, birthday: Option<NaiveDate>, phone: String) -> Self {
        Contact {
            name,
            birthday,
            phone,
        }
    }

    pub fn from_record(name: String, record: ContactRecord) -> Self {
        Contact {
            name,
            birthday: record.birthday,
            phone: record.phone,
        }
    }

    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            birthday: self.birthday,
            phone: self.phone.clone(),
        }
    }

    pub fn display_line(&self) -> String {
        let birthday = self
            .birthday
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let phone = if self.phone.is_empty() {
            NOT_AVAILABLE
        } else {
            self.phone.as_str()
        };

        format!("{}: Birthday - {}, Phone - {}", self.name, birthday, phone)
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-cases every word. A letter following a non-letter starts a new word,
/// so "o'neil" becomes "O'Neil".
pub fn normalize_surname(surname: &str) -> String {
    let mut normalized = String::with_capacity(surname.len());
    let mut prev_is_alpha = false;

    for c in surname.trim().chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            normalized.push(c);
            prev_is_alpha = false;
        }
    }
    normalized
}

pub fn contact_key(name: &str, surname: &str) -> Result<String, AppError> {
    let name = normalize_name(name);
    let surname = normalize_surname(surname);

    if name.is_empty() || surname.is_empty() {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }

    Ok(format!("{} {}", name, surname))
}

pub fn parse_birthday(text: &str) -> Result<NaiveDate, AppError> {
    let text = text.trim();

    // chrono takes any year width and a sign; the book only stores four digits
    let re = Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$")?;
    if !re.is_match(text) {
        return Err(AppError::Validation(ValidationReq::birthday_req()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| AppError::Validation(ValidationReq::birthday_req()))
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // ASCII digits only, at least one of them
    let re = Regex::new(r"^[0-9]+$")?;
    Ok(re.is_match(phone))
}

fn serialize_birthday<S>(birthday: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match birthday {
        Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(s) if !s.trim().is_empty() => parse_birthday(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn deserialize_phone<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// TEST
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names_into_key() -> Result<(), AppError> {
        assert_eq!(contact_key("  jane ", "doe")?, "Jane Doe");
        assert_eq!(contact_key("GUIDO", "van rossum")?, "Guido Van Rossum");
        assert_eq!(contact_key("john", "forbes nash jr.")?, "John Forbes Nash Jr.");
        assert_eq!(contact_key("shaquille", "o'neal")?, "Shaquille O'Neal");
        Ok(())
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(contact_key("   ", "Doe"), Err(AppError::Validation(_))));
        assert!(matches!(contact_key("Jane", ""), Err(AppError::Validation(_))));
    }

    #[test]
    fn birthday_must_be_a_real_date() -> Result<(), AppError> {
        assert_eq!(
            parse_birthday("10/12/1815")?,
            NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()
        );

        assert!(matches!(parse_birthday("31/13/2000"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday("30/02/2001"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday("2000-01-01"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday(""), Err(AppError::Validation(_))));

        assert!(matches!(parse_birthday("02/02/5"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday("02/02/-500"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday("02/02/+2000"), Err(AppError::Validation(_))));
        assert!(matches!(parse_birthday("02/02/20000"), Err(AppError::Validation(_))));

        assert_eq!(parse_birthday(" 1/2/2000 ")?, NaiveDate::from_ymd_opt(2000, 2, 1).unwrap());
        Ok(())
    }

    #[test]
    fn phone_must_be_digits_only() -> Result<(), AppError> {
        assert!(validate_phone("5551234")?);
        assert!(!validate_phone("12-34")?);
        assert!(!validate_phone("+2348031234567")?);
        assert!(!validate_phone("")?);
        assert!(!validate_phone("١٢٣")?); // Non-ASCII digits
        Ok(())
    }

    #[test]
    fn display_line_marks_missing_phone() -> Result<(), AppError> {
        let contact = Contact::new(
            "Ada Lovelace".to_string(),
            Some(parse_birthday("10/12/1815")?),
            String::new(),
        );

        assert_eq!(
            contact.display_line(),
            "Ada Lovelace: Birthday - 10/12/1815, Phone - Not available"
        );
        Ok(())
    }

    #[test]
    fn record_reads_file_shape() -> Result<(), AppError> {
        let record: ContactRecord =
            serde_json::from_str(r#"{"birthday": "02/02/1990", "phone": "5551234"}"#)?;
        assert_eq!(record.birthday, NaiveDate::from_ymd_opt(1990, 2, 2));
        assert_eq!(record.phone, "5551234");

        let record: ContactRecord = serde_json::from_str(r#"{"birthday": ""}"#)?;
        assert_eq!(record.birthday, None);
        assert_eq!(record.phone, "");

        let record: ContactRecord =
            serde_json::from_str(r#"{"birthday": null, "phone": null}"#)?;
        assert_eq!(record.birthday, None);
        assert_eq!(record.phone, "");

        assert!(serde_json::from_str::<ContactRecord>(r#"{"birthday": "31/13/2000"}"#).is_err());
        assert!(serde_json::from_str::<ContactRecord>(r#"{"birthday": "02/02/-500"}"#).is_err());
        Ok(())
    }

    #[test]
    fn record_writes_padded_date() -> Result<(), AppError> {
        let record = ContactRecord {
            birthday: NaiveDate::from_ymd_opt(1928, 6, 13),
            phone: String::new(),
        };

        assert_eq!(
            serde_json::to_string(&record)?,
            r#"{"birthday":"13/06/1928","phone":""}"#
        );
        Ok(())
    }
}
