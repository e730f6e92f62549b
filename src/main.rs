//! TMList - Resolve includes between exclusion lists

use std::process::ExitCode;

fn main() -> ExitCode {
    match tmlist::cli::run() {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            tmlist::cli::ExitStatus::from_error(&e).into()
        }
    }
}
