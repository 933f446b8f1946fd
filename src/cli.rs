use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "naver-e2e")]
#[command(about = "End-to-end UI checks against the Naver homepage", long_about = None)]
pub struct Cli {
    /// Run only scenarios whose name contains this substring
    #[arg(short, long, value_name = "NAME")]
    pub filter: Option<String>,

    /// Run the browser with a visible window
    #[arg(long, default_value = "false")]
    pub headed: bool,

    /// Directory for screenshots and the JSON report
    #[arg(long, value_name = "DIR")]
    pub artifact_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["naver-e2e"]).unwrap();
        assert!(cli.filter.is_none());
        assert!(!cli.headed);
        assert!(cli.artifact_dir.is_none());
    }

    #[test]
    fn test_cli_with_filter_short() {
        let cli = Cli::try_parse_from(["naver-e2e", "-f", "news"]).unwrap();
        assert_eq!(cli.filter.as_deref(), Some("news"));
    }

    #[test]
    fn test_cli_with_headed_and_dir() {
        let cli =
            Cli::try_parse_from(["naver-e2e", "--headed", "--artifact-dir", "out"]).unwrap();
        assert!(cli.headed);
        assert_eq!(cli.artifact_dir.as_deref(), Some("out"));
    }
}
