use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn interactive_session() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json").to_string_lossy().to_string();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("STORAGE_CHOICE", "json")
        .env("CONTACTS_PATH", &path)
        .write_stdin("hello\nadd\nada\nlovelace\n10/12/1815\n12-34\n1815\nlist\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid command. Please enter a valid command.",
        ))
        .stdout(predicate::str::contains(
            "Phone number should contain only digits.",
        ))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains(
            "Ada Lovelace: Birthday - 10/12/1815, Phone - 1815",
        ))
        .stdout(predicate::str::contains("Closing the bot."));

    // The contact survived the session
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("STORAGE_CHOICE", "json")
        .env("CONTACTS_PATH", &path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));

    Ok(())
}

#[test]
fn mem_storage_forgets_between_runs() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--storage", "mem"])
        .write_stdin("add\nJane\nDoe\n02/02/1990\n5551234\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--storage", "mem", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));

    Ok(())
}
