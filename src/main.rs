use std::process::ExitCode;

use clap::Parser;
use dupcheck::args::Args;
use dupcheck::{commands, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
