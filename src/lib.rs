//! Command-line contact book keeping names, birthdays and phone numbers in a
//! local JSON file.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
