use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pollgrid")]
#[command(about = "Terminal client for viewing and answering yes/no/unknown availability polls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a poll and print its response grid
    Show {
        /// Poll identifier
        id: String,

        /// Poll service endpoint (overrides POLLGRID_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Submit a response without entering the interactive view
    Respond {
        /// Poll identifier
        id: String,

        /// Respondent name
        #[arg(short, long)]
        name: String,

        /// Comma-separated answers in option order (yes, no, unknown);
        /// empty entries count as unknown
        #[arg(short, long, default_value = "")]
        selections: String,

        /// Poll service endpoint (overrides POLLGRID_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Launch the interactive poll view
    Tui {
        /// Poll identifier
        id: String,

        /// Poll service endpoint (overrides POLLGRID_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}

impl Commands {
    /// Split a comma-separated selections argument, keeping empty entries so
    /// they normalize to unknown downstream.
    pub fn parse_selections(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(',').map(|entry| entry.trim().to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selections_keeps_empty_entries() {
        assert_eq!(
            Commands::parse_selections("yes,,no"),
            vec!["yes".to_string(), "".to_string(), "no".to_string()]
        );
    }

    #[test]
    fn test_parse_selections_empty_argument() {
        assert!(Commands::parse_selections("").is_empty());
    }

    #[test]
    fn test_parse_selections_trims_whitespace() {
        assert_eq!(
            Commands::parse_selections(" yes , unknown "),
            vec!["yes".to_string(), "unknown".to_string()]
        );
    }
}
