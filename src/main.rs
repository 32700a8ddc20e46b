use bistreg::cli::{self, Cli};
use bistreg::logger;
use clap::Parser;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init(args.verbose);

    match cli::execute(&args.command) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
