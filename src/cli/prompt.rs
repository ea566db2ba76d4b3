use crate::cli::command::PromptCommand;
use crate::domain::ContactManager;
use crate::domain::contact::{ValidationReq, parse_birthday, validate_phone};
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const COMMAND_PROMPT: &str = "Enter a command (add/change/find/list/close/exit): ";
pub const INVALID_COMMAND: &str = "Invalid command. Please enter a valid command.";
pub const CLOSING: &str = "Closing the bot.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Line-oriented dialog over any reader/writer pair. Every `ask` returns
/// `None` once the input is exhausted.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Keeps asking until the answer is a digits-only phone number.
    fn ask_phone(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        loop {
            let Some(phone) = self.ask(prompt)? else {
                return Ok(None);
            };

            if validate_phone(&phone)? {
                return Ok(Some(phone));
            }
            self.say(&ValidationReq::phone_req())?;
        }
    }

    fn ask_full_name(&mut self) -> Result<Option<(String, String)>, AppError> {
        let Some(name) = self.ask("Enter the name of the contact: ")? else {
            return Ok(None);
        };
        let Some(surname) = self.ask("Enter the surname of the contact: ")? else {
            return Ok(None);
        };
        Ok(Some((name, surname)))
    }

    /// Runs the command loop until `close`, `exit` or end of input.
    pub fn run(&mut self, manager: &mut ContactManager) -> Result<(), AppError> {
        loop {
            let Some(action) = self.ask(COMMAND_PROMPT)? else {
                return Ok(());
            };

            let command = match action.parse::<PromptCommand>() {
                Ok(command) => command,
                Err(e) => {
                    log::debug!("{}", e);
                    self.say(INVALID_COMMAND)?;
                    continue;
                }
            };

            if command.is_quit() {
                self.say(CLOSING)?;
                return Ok(());
            }

            let outcome = match command {
                PromptCommand::Add => self.add(manager)?,
                PromptCommand::Change => self.change(manager)?,
                PromptCommand::Find => self.find(manager)?,
                PromptCommand::List => Some(manager.list_contacts().join("\n")),
                PromptCommand::Close | PromptCommand::Exit => None,
            };

            match outcome {
                Some(message) => self.say(&message)?,
                None => return Ok(()),
            }
        }
    }

    fn add(&mut self, manager: &mut ContactManager) -> Result<Option<String>, AppError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return Ok(None);
        };
        let Some(birthday) = self.ask("Enter the birthday of the contact (DD/MM/YYYY): ")? else {
            return Ok(None);
        };

        // Reject the date before asking for a phone number
        if let Err(e) = parse_birthday(&birthday) {
            return Ok(Some(outcome_message(&e)));
        }

        let Some(phone) = self.ask_phone("Enter the phone number of the contact: ")? else {
            return Ok(None);
        };

        Ok(Some(
            match manager.add_contact(&name, &surname, &birthday, &phone) {
                Ok(_) => "Contact added.".to_string(),
                Err(e) => outcome_message(&e),
            },
        ))
    }

    fn change(&mut self, manager: &mut ContactManager) -> Result<Option<String>, AppError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return Ok(None);
        };

        match manager.contains(&name, &surname) {
            Ok(true) => {}
            Ok(false) => return Ok(Some(CONTACT_NOT_FOUND.to_string())),
            Err(e) => return Ok(Some(outcome_message(&e))),
        }

        let Some(phone) = self.ask_phone("Enter the new phone number: ")? else {
            return Ok(None);
        };

        Ok(Some(match manager.change_contact(&name, &surname, &phone) {
            Ok(_) => "Phone number updated.".to_string(),
            Err(e) => outcome_message(&e),
        }))
    }

    fn find(&mut self, manager: &ContactManager) -> Result<Option<String>, AppError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return Ok(None);
        };

        Ok(Some(match manager.find_contact(&name, &surname) {
            Ok(contact) => contact.display_line(),
            Err(e) => outcome_message(&e),
        }))
    }
}

/// Human-readable outcome for a failed operation.
fn outcome_message(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) => msg.clone(),
        AppError::NotFound(_) => CONTACT_NOT_FOUND.to_string(),
        other => format!("Error: {}", other),
    }
}

pub fn run_prompt<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: R,
    output: W,
) -> Result<(), AppError> {
    Prompt::new(input, output).run(manager)
}
