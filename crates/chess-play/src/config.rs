//! Configuration file loading for the terminal front-end.
//!
//! Settings come from an optional TOML file; command-line flags override
//! them in `main`.

use std::path::{Path, PathBuf};

use chess_core::{Color, Piece};
use chess_engine::DEFAULT_DEPTH;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Which side the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AiSide {
    White,
    #[default]
    Black,
    /// Two human players.
    None,
}

impl AiSide {
    pub fn color(self) -> Option<Color> {
        match self {
            AiSide::White => Some(Color::White),
            AiSide::Black => Some(Color::Black),
            AiSide::None => None,
        }
    }
}

/// How the engine's pawns promote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    /// Uniformly random among the four promotion pieces.
    #[default]
    Random,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// The fixed piece, or `None` for the random policy.
    pub fn fixed_piece(self) -> Option<Piece> {
        match self {
            PromotionChoice::Random => None,
            PromotionChoice::Queen => Some(Piece::Queen),
            PromotionChoice::Rook => Some(Piece::Rook),
            PromotionChoice::Bishop => Some(Piece::Bishop),
            PromotionChoice::Knight => Some(Piece::Knight),
        }
    }
}

/// Settings for a terminal game.
///
/// Uses `chess.toml` in the current directory by default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayConfig {
    /// Side played by the engine. Defaults to black.
    #[serde(default)]
    pub ai_color: AiSide,
    /// Search depth below the root move. Defaults to 3.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Promotion policy for the engine's pawns. Defaults to random.
    #[serde(default)]
    pub promotion: PromotionChoice,
    /// Seed for the random promotion policy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Starting position in FEN. Defaults to the standard layout.
    #[serde(default)]
    pub fen: Option<String>,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            ai_color: AiSide::default(),
            depth: default_depth(),
            promotion: PromotionChoice::default(),
            seed: None,
            log_level: default_log_level(),
            fen: None,
        }
    }
}

impl PlayConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
ai_color = "white"
depth = 2
promotion = "knight"
seed = 99
log_level = "debug"
fen = "7k/P7/8/8/8/8/8/K7 w - - 0 1"
"#;

        let config: PlayConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.ai_color, AiSide::White);
        assert_eq!(config.ai_color.color(), Some(Color::White));
        assert_eq!(config.depth, 2);
        assert_eq!(config.promotion, PromotionChoice::Knight);
        assert_eq!(config.promotion.fixed_piece(), Some(Piece::Knight));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.fen.as_deref(), Some("7k/P7/8/8/8/8/8/K7 w - - 0 1"));
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();

        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.ai_color, AiSide::Black);
        assert_eq!(config.depth, 3);
        assert_eq!(config.promotion, PromotionChoice::Random);
        assert_eq!(config.promotion.fixed_piece(), None);
        assert_eq!(config.log_level, "info");
        assert!(config.fen.is_none());
    }

    #[test]
    fn test_two_human_players() {
        let config: PlayConfig = toml::from_str(r#"ai_color = "none""#).unwrap();
        assert_eq!(config.ai_color.color(), None);
    }

    #[test]
    fn test_invalid_value_is_parse_error() {
        let result: Result<PlayConfig, _> = toml::from_str(r#"promotion = "king""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let config = PlayConfig::load(Path::new("does/not/exist/chess.toml")).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("chess-play-{}.toml", std::process::id()));
        std::fs::write(&path, "depth = \"deep\"").unwrap();
        let result = PlayConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(PlayConfig::config_path(), PathBuf::from("chess.toml"));
    }
}
