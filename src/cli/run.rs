use crate::prelude::{
    AppError, ContactManager,
    command::{Cli, Commands},
    prompt,
    storage::{self, StorageMediums},
};
use clap::Parser;
use dotenv::dotenv;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    // .env values feed the clap env fallbacks
    dotenv().ok();

    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage)?;
    let storage = storage::parse_storage_type(medium, &cli.path)?;

    log::info!(
        "Using {} storage at {}",
        medium.is_which(),
        if medium.is_mem() { "memory" } else { cli.path.as_str() }
    );

    let mut manager = ContactManager::open(storage);

    match cli.command {
        None => {
            println!("\n--- Contact BOOK ---\n");
            let stdin = io::stdin();
            prompt::run_prompt(&mut manager, stdin.lock(), io::stdout())
        }

        Some(Commands::Add {
            name,
            surname,
            birthday,
            phone,
        }) => {
            let key = manager.add_contact(&name, &surname, &birthday, &phone)?;

            println!("Contact added: {}", key);
            Ok(())
        }

        Some(Commands::Change {
            name,
            surname,
            phone,
        }) => {
            let key = manager.change_contact(&name, &surname, &phone)?;

            println!("Phone number updated: {}", key);
            Ok(())
        }

        Some(Commands::Find { name, surname }) => {
            let contact = manager.find_contact(&name, &surname)?;

            println!("{}", contact.display_line());
            Ok(())
        }

        Some(Commands::List) => {
            for line in manager.list_contacts() {
                println!("{}", line);
            }
            Ok(())
        }

        Some(Commands::Seed) => {
            let inserted = manager.seed_defaults()?;

            println!("Seeded {} contacts", inserted);
            Ok(())
        }
    }
}
