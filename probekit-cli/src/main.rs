//! Main entry point for the probekit CLI application.
//!
//! Parses arguments, runs the selected command and maps failures to exit
//! code 1 with the error printed on stderr.

use probekit::{parse_cli, run};
use std::process;

fn main() {
    let cli_args = parse_cli();

    if let Err(e) = run(cli_args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
