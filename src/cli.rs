use std::path::PathBuf;

use clap::Parser;

/// Interactive market search with live product suggestions
#[derive(Debug, Parser)]
#[command(name = "mandi", version, about)]
pub struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_overrides() {
        let cli = Cli::try_parse_from(["mandi"]).unwrap();
        assert_eq!(cli.server, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_server_flag() {
        let cli = Cli::try_parse_from(["mandi", "--server", "http://localhost:8000"]).unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["mandi", "--config", "/tmp/mandi.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/mandi.toml")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["mandi", "--nope"]).is_err());
    }
}
