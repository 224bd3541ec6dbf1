//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File the log is written to
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "noughts",
            "-c",
            "noughts.toml",
            "--log-file",
            "/tmp/n.log",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("noughts.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/n.log"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["noughts", "--server-url", "x"]).is_err());
    }
}
