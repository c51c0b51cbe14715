use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:vak_quiz.db";
// The questionnaire has always been cut to its first 20 questions.
pub const DEFAULT_QUESTION_LIMIT: usize = 20;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub catalog_path: Option<PathBuf>,
    pub question_limit: usize,
    pub shuffle: bool,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            catalog_path: None,
            question_limit: DEFAULT_QUESTION_LIMIT,
            shuffle: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            catalog_path: lookup("VAK_CATALOG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            question_limit: parse_or(
                "VAK_QUESTION_LIMIT",
                lookup("VAK_QUESTION_LIMIT"),
                defaults.question_limit,
            ),
            shuffle: lookup("VAK_SHUFFLE")
                .map(|v| is_truthy(&v))
                .unwrap_or(defaults.shuffle),
            max_connections: parse_or(
                "VAK_DB_MAX_CONNECTIONS",
                lookup("VAK_DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            )
            .max(1),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("VAK_CATALOG", "questions.json"),
            ("VAK_QUESTION_LIMIT", "5"),
            ("VAK_SHUFFLE", "Yes"),
            ("VAK_DB_MAX_CONNECTIONS", "2"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.catalog_path, Some(PathBuf::from("questions.json")));
        assert_eq!(config.question_limit, 5);
        assert!(config.shuffle);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("VAK_QUESTION_LIMIT", "many"),
            ("VAK_DB_MAX_CONNECTIONS", "0"),
        ]);
        assert_eq!(config.question_limit, DEFAULT_QUESTION_LIMIT);
        assert_eq!(config.max_connections, 1);
    }
}
