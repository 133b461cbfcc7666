//! Command-line interface.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_HISTORY_LIMIT, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
};
use crate::guidance::ChallengeId;
use clap::{Parser, Subcommand};

pub mod render;

/// Reflective journaling with verse-based spiritual guidance
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Use only the local guidance engine, even if a Gemini API key is set
    #[clap(long, global = true)]
    pub local: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Log level filter (e.g. "debug", "soulscript=trace"); overrides RUST_LOG
    #[clap(long, global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compose guidance for what's on your heart and save it
    Reflect {
        /// The text to reflect on
        #[clap(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show a random verse of wisdom
    Wisdom,

    /// Guidance for a life challenge: fear, anger, doubt, attachment,
    /// forgiveness, purpose, love or loss
    Challenge {
        /// Challenge id
        id: ChallengeId,
    },

    /// Analyse patterns and growth across saved reflections
    Journey,

    /// Show saved reflections
    History {
        /// Number of most recent entries to show
        #[clap(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_collects_words() {
        let args = CliArgs::parse_from(["soulscript", "reflect", "I", "feel", "lost"]);
        assert!(!args.local);
        assert_eq!(args.log_format, LOG_FORMAT_TEXT);
        match args.command {
            Command::Reflect { text } => assert_eq!(text, vec!["I", "feel", "lost"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reflect_requires_text() {
        assert!(CliArgs::try_parse_from(["soulscript", "reflect"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "soulscript",
            "wisdom",
            "--local",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert!(args.local);
        assert_eq!(args.log_format, LOG_FORMAT_JSON);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.command, Command::Wisdom);
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        assert!(CliArgs::try_parse_from(["soulscript", "--log-format", "xml", "journey"]).is_err());
    }

    #[test]
    fn test_challenge_id_parsing() {
        let args = CliArgs::parse_from(["soulscript", "challenge", "loss"]);
        assert_eq!(args.command, Command::Challenge { id: ChallengeId::Loss });
        assert!(CliArgs::try_parse_from(["soulscript", "challenge", "boredom"]).is_err());
    }

    #[test]
    fn test_history_limit() {
        let args = CliArgs::parse_from(["soulscript", "history"]);
        assert_eq!(args.command, Command::History { limit: DEFAULT_HISTORY_LIMIT });

        let args = CliArgs::parse_from(["soulscript", "history", "--limit", "3"]);
        assert_eq!(args.command, Command::History { limit: 3 });
    }
}
