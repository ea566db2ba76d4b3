pub mod contact;
pub mod manager;

use crate::errors::AppError;

pub use contact::{Contact, ContactRecord};
pub use manager::ContactManager;
