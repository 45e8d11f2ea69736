//! Tutorial metadata CLI entry point

use std::process::ExitCode;

use tutorial_metadata::logging::init_cli_logger;
use tutorial_metadata::{run_scan, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_cli_logger(cli.verbose);

    match run_scan(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
