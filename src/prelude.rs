pub use crate::cli::{command, prompt, run_app};
pub use crate::domain::{
    ContactManager,
    contact::{self, Contact, ContactRecord},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, memory, stores};
