//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer's random fallback (OS entropy when absent).
    #[serde(default)]
    seed: Option<u64>,

    /// File that receives logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Glyph drawn in cells held by the human.
    #[serde(default = "default_human_glyph")]
    human_glyph: char,

    /// Glyph drawn in cells held by the computer.
    #[serde(default = "default_computer_glyph")]
    computer_glyph: char,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tactoe.log")
}

fn default_human_glyph() -> char {
    'X'
}

fn default_computer_glyph() -> char {
    'O'
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            log_file: default_log_file(),
            human_glyph: default_human_glyph(),
            computer_glyph: default_computer_glyph(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(delay_ms = config.computer_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, delay_ms: Option<u64>, seed: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_glyph == self.computer_glyph {
            return Err(ConfigError::new(format!(
                "Player glyphs must differ (both are '{}')",
                self.human_glyph
            )));
        }
        if self.human_glyph.is_whitespace() || self.computer_glyph.is_whitespace() {
            return Err(ConfigError::new("Player glyphs must be visible characters"));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            computer_delay_ms = 120
            seed = 99
            human_glyph = "H"
            "#,
        )
        .expect("valid config");
        assert_eq!(*config.computer_delay_ms(), 120);
        assert_eq!(*config.seed(), Some(99));
        assert_eq!(*config.human_glyph(), 'H');
        assert_eq!(*config.computer_glyph(), 'O');
    }

    #[test]
    fn test_identical_glyphs_rejected() {
        let err = GameConfig::from_toml_str(r#"computer_glyph = "X""#).unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml_str("computer_delay_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(0), Some(5));
        assert_eq!(*config.computer_delay_ms(), 0);
        assert_eq!(*config.seed(), Some(5));

        let config = config.with_overrides(None, None);
        assert_eq!(*config.seed(), Some(5));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            GameConfig::load_or_default(&missing).expect("defaults"),
            GameConfig::default()
        );

        let path = dir.path().join("tactoe.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "computer_delay_ms = 50").expect("write config");
        let config = GameConfig::load_or_default(&path).expect("parsed");
        assert_eq!(*config.computer_delay_ms(), 50);
    }
}
