// probekit-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "probekit: ffprobe section parser",
    long_about = "Runs ffprobe -show_format -show_streams on a media file \
                  and prints the parsed sections."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// ffprobe binary to run (defaults to `ffprobe` from PATH)
    #[arg(long = "ffprobe", global = true, value_name = "PATH", env = "PROBEKIT_FFPROBE")]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes a media file and prints its format and stream sections
    Info(InfoArgs),

    /// Checks that ffprobe can be started
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Media file to probe (passed to ffprobe as is)
    #[arg(required = true, value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Print the result as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

/// Parses the process arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info() {
        let cli = parse_cli_from(["probekit", "info", "movie.mkv", "--json"]).unwrap();
        match cli.command {
            Commands::Info(args) => {
                assert_eq!(args.input_path, PathBuf::from("movie.mkv"));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse_cli_from([
            "probekit", "check", "--ffprobe", "/opt/ffprobe", "-v", "--log-dir", "logs",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert_eq!(cli.ffprobe_path, Some(PathBuf::from("/opt/ffprobe")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_info_requires_input() {
        assert!(parse_cli_from(["probekit", "info"]).is_err());
    }
}
