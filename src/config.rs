use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors that can occur when reading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// TELEGRAM_BOT_TOKEN is not set (or set to an empty string).
    MissingToken,
    /// TELEGRAM_BOT_TOKEN does not look like a bot token.
    InvalidToken,
    /// PORT is not a valid port number.
    InvalidPort { value: String, source: ParseIntError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "TELEGRAM_BOT_TOKEN must be set"),
            Self::InvalidToken => write!(
                f,
                "TELEGRAM_BOT_TOKEN appears invalid (expected format: 123456789:ABCdefGHI...)"
            ),
            Self::InvalidPort { value, source } => {
                write!(f, "invalid PORT '{}': {}", value, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPort { source, .. } => Some(source),
            _ => None,
        }
    }
}

const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub telegram_bot_token: String,
    /// Port the webhook server listens on.
    pub port: u16,
    /// Directory for state files (logs). Defaults to current directory.
    pub data_dir: PathBuf,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, one variable at a time.
    fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = token.split(':').collect();
        if token_parts.len() != 2
            || token_parts[0].parse::<u64>().is_err()
            || token_parts[1].is_empty()
        {
            return Err(ConfigError::InvalidToken);
        }

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort { value, source: e })?,
            None => DEFAULT_PORT,
        };

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            telegram_bot_token: token,
            port,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        Config::load_with(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        })
    }

    fn assert_err(result: Result<Config, ConfigError>) -> ConfigError {
        match result {
            Ok(_) => panic!("expected error, got Ok"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_valid_config_with_defaults() {
        let config = load(&[("TELEGRAM_BOT_TOKEN", "123456789:ABCdefGHIjklMNOpqrsTUVwxyz")])
            .expect("should load valid config");
        assert_eq!(config.telegram_bot_token, "123456789:ABCdefGHIjklMNOpqrsTUVwxyz");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_token() {
        let err = assert_err(load(&[]));
        assert!(matches!(err, ConfigError::MissingToken));
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_empty_token() {
        let err = assert_err(load(&[("TELEGRAM_BOT_TOKEN", "")]));
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_invalid_token_format_no_colon() {
        let err = assert_err(load(&[("TELEGRAM_BOT_TOKEN", "invalid_token_no_colon")]));
        assert!(matches!(err, ConfigError::InvalidToken));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_invalid_token_format_non_numeric_id() {
        let err = assert_err(load(&[("TELEGRAM_BOT_TOKEN", "notanumber:ABCdef")]));
        assert!(matches!(err, ConfigError::InvalidToken));
    }

    #[test]
    fn test_invalid_token_format_empty_secret() {
        let err = assert_err(load(&[("TELEGRAM_BOT_TOKEN", "123456789:")]));
        assert!(matches!(err, ConfigError::InvalidToken));
    }

    #[test]
    fn test_custom_port() {
        let config = load(&[
            ("TELEGRAM_BOT_TOKEN", "123456789:ABCdef"),
            ("PORT", "9000"),
        ])
        .expect("should load");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port() {
        let err = assert_err(load(&[
            ("TELEGRAM_BOT_TOKEN", "123456789:ABCdef"),
            ("PORT", "not-a-port"),
        ]));
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_data_dir_override() {
        let config = load(&[
            ("TELEGRAM_BOT_TOKEN", "123456789:ABCdef"),
            ("DATA_DIR", "/var/lib/menubot"),
        ])
        .expect("should load");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/menubot"));
    }
}
