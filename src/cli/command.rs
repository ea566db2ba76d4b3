use crate::errors::AppError;
use crate::storage::DEFAULT_STORAGE_PATH;
use clap::{Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Path of the JSON contact file
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub path: String,

    /// Run a single command; without one the interactive prompt starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, or overwrite one with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact surname
        #[arg(long)]
        surname: String,

        /// Birthday as DD/MM/YYYY
        #[arg(long)]
        birthday: String,

        /// Phone number, digits only
        #[arg(long)]
        phone: String,
    },
    /// Change the phone number of an existing contact
    Change {
        #[arg(long)]
        name: String,

        #[arg(long)]
        surname: String,

        /// New phone number, digits only
        #[arg(long)]
        phone: String,
    },
    /// Show a single contact
    Find {
        #[arg(long)]
        name: String,

        #[arg(long)]
        surname: String,
    },
    /// List contacts
    List,
    /// Install the reference contacts (existing entries are kept)
    Seed,
}

/// Commands understood by the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand {
    Add,
    Change,
    Find,
    List,
    Close,
    Exit,
}

impl FromStr for PromptCommand {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "add" => Ok(PromptCommand::Add),
            "change" => Ok(PromptCommand::Change),
            "find" => Ok(PromptCommand::Find),
            "list" => Ok(PromptCommand::List),
            "close" => Ok(PromptCommand::Close),
            "exit" => Ok(PromptCommand::Exit),
            _ => Err(AppError::ParseCommand(input.trim().to_string())),
        }
    }
}

impl PromptCommand {
    pub fn is_quit(&self) -> bool {
        matches!(self, PromptCommand::Close | PromptCommand::Exit)
    }
}
