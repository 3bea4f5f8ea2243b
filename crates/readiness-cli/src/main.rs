use std::process::ExitCode;

use clap::Parser;
use readiness_cli::Cli;

fn main() -> ExitCode {
    // A missing .env file is not an error.
    dotenv::dotenv().ok();
    readiness_cli::run(Cli::parse())
}
