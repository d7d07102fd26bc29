use std::process::ExitCode;

use clap::Parser;
use intlc::cli::{Arguments, ExitStatus};
use intlc::report;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match intlc::cli::run_cli(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            report::error(&format!("{err:#}"));
            ExitStatus::Error.into()
        }
    }
}
