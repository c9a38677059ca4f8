//! FarmTech - interactive field records

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = farmtech::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
