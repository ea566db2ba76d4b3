use contact_book::prelude::run_app;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
