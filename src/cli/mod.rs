pub mod authorize;
pub mod output;
pub mod report;

use clap::Parser;

use crate::config::OutputMode;

#[derive(Parser)]
#[command(
    name = "nest-thermostats",
    version,
    about = "Print the current readings of every Nest thermostat in a Device Access project"
)]
pub struct ReportCli {
    /// Output as human-readable table instead of the text report
    #[arg(short = 't', long = "table", conflicts_with = "json")]
    pub table: bool,

    /// Output readings as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output (log HTTP requests to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl ReportCli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.table {
            OutputMode::Table
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Parser)]
#[command(
    name = "nest-authorize",
    version,
    about = "Authorize the SDM API once and obtain a refresh token"
)]
pub struct AuthorizeCli {
    /// Verbose output (log HTTP requests to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults_to_text() {
        let cli = ReportCli::try_parse_from(["nest-thermostats"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_report_output_flags() {
        let cli = ReportCli::try_parse_from(["nest-thermostats", "--json", "-v"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert!(cli.verbose);

        let cli = ReportCli::try_parse_from(["nest-thermostats", "-t"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Table);

        assert!(ReportCli::try_parse_from(["nest-thermostats", "-t", "--json"]).is_err());
    }

    #[test]
    fn test_authorize_takes_no_arguments() {
        assert!(AuthorizeCli::try_parse_from(["nest-authorize"]).is_ok());
        assert!(AuthorizeCli::try_parse_from(["nest-authorize", "code"]).is_err());
    }
}
