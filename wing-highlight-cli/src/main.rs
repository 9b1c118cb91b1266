use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wing_highlight_cli::{Args, EXIT_UNAVAILABLE, run, unavailable_reason};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(error) => match unavailable_reason(&error) {
            Some(reason) => {
                eprintln!("highlighting unavailable: {}", reason);
                ExitCode::from(EXIT_UNAVAILABLE)
            }
            None => {
                eprintln!("error: {:#}", error);
                ExitCode::FAILURE
            }
        },
    }
}
