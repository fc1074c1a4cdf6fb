#![allow(clippy::print_stderr)]

use clap::Parser;
use std::process::ExitCode;

use hidl2aidl_cli::args::CliArgs;
use hidl2aidl_cli::driver;

fn main() -> ExitCode {
    // Initialize tracing if HIDL2AIDL_LOG or RUST_LOG is set (zero cost otherwise).
    hidl2aidl_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match driver::run(&args) {
        Ok(summary) => {
            tracing::debug!(log = %summary.notes_path.display(), "wrote conversion log");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
