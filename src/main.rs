use std::process::ExitCode;

use clap::Parser;
use pizza_shop::adapter::inbound::cli::{self, command::Cli};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
