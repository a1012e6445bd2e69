//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display and logging preferences for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Colour name for X marks.
    x_color: String,

    /// Colour name for O marks.
    o_color: String,

    /// Show 1-9 hints in empty cells.
    #[getter(skip)]
    show_cell_numbers: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            show_cell_numbers: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.palette()?;
        Ok(config)
    }

    /// Loads from `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Whether empty cells show their key hint.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Resolves the X and O colour names.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color(&self.x_color)?,
            o: parse_color(&self.o_color)?,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    name.parse()
        .map_err(|_| ConfigError::new(format!("Unknown colour: {:?}", name)))
}

/// Resolved mark colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour for X.
    pub x: Color,
    /// Colour for O.
    pub o: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
        }
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
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
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.log_filter(), "info");
        assert!(config.show_cell_numbers());
        assert_eq!(config.palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = TuiConfig::from_toml("x_color = \"green\"\n").unwrap();
        assert_eq!(config.x_color(), "green");
        assert_eq!(config.o_color(), "red");
        assert_eq!(config.palette().unwrap().x, Color::Green);
    }

    #[test]
    fn test_unknown_colour_rejected() {
        let err = TuiConfig::from_toml("o_color = \"not-a-colour\"\n").unwrap_err();
        assert!(err.message.contains("Unknown colour"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"\nshow_cell_numbers = false").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(!config.show_cell_numbers());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(TuiConfig::load(None).unwrap(), TuiConfig::default());
    }
}
