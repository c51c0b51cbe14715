pub mod catalog;
pub mod dashboard;
pub mod quiz;

use crate::catalog::Catalog;
use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vak-quiz", version, about = "VAK learning-style questionnaire")]
pub struct Cli {
    /// SQLite database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// JSON question catalog (overrides VAK_CATALOG, default: built-in questions)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Number of questions to ask, 0 for all (overrides VAK_QUESTION_LIMIT)
    #[arg(long, global = true)]
    pub question_limit: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer the questionnaire and store the result
    Quiz {
        /// Respondent name; asked interactively when omitted
        #[arg(long)]
        name: Option<String>,

        /// Shuffle the options of every question
        #[arg(long)]
        shuffle: bool,
    },
    /// Show aggregate results of all stored sessions
    Dashboard {
        /// Also list how often each answer was given
        #[arg(long)]
        answers: bool,

        /// Print category totals and label distribution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and list the question catalog
    Catalog,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(limit) = self.question_limit {
            config.question_limit = limit;
        }
        if let Command::Quiz { shuffle: true, .. } = self.command {
            config.shuffle = true;
        }
        config
    }
}

pub async fn run(
    cli: Cli,
    config: &Config,
    catalog: &Catalog,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Command::Quiz { name, .. } => quiz::handle_quiz_command(config, catalog, name).await,
        Command::Dashboard { answers, json } => {
            dashboard::handle_dashboard_command(config, answers, json).await
        }
        Command::Catalog => catalog::handle_catalog_command(catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment_config() {
        let cli = Cli::parse_from([
            "vak-quiz",
            "--database-url",
            "sqlite::memory:",
            "--question-limit",
            "0",
            "quiz",
            "--shuffle",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.question_limit, 0);
        assert!(config.shuffle);
    }

    #[test]
    fn unset_flags_keep_config() {
        let cli = Cli::parse_from(["vak-quiz", "dashboard", "--json"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
        assert!(matches!(cli.command, Command::Dashboard { answers: false, json: true }));
    }
}
