//! chess-play - play chess against the minimax engine in a terminal.
//!
//! Reads moves from stdin, prints the board after every move, and lets the
//! engine answer for its side.

mod command;
mod config;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_engine::{FixedPromotion, Game, RandomPromotion};
use clap::Parser;
use config::{AiSide, PlayConfig, PromotionChoice};
use session::Session;
use tracing_subscriber::EnvFilter;

/// Play chess against a minimax engine in the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess against a minimax engine in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value_os_t = PlayConfig::config_path())]
    config: PathBuf,

    /// Search depth below the root move
    #[arg(long)]
    depth: Option<u32>,

    /// Side played by the engine
    #[arg(long, value_enum)]
    ai_color: Option<AiSide>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Promotion policy for the engine's pawns
    #[arg(long, value_enum)]
    promotion: Option<PromotionChoice>,

    /// Seed for the random promotion policy
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Overrides file settings with the flags that were given.
    fn apply(self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(ai_color) = self.ai_color {
            config.ai_color = ai_color;
        }
        if let Some(fen) = self.fen {
            config.fen = Some(fen);
        }
        if let Some(promotion) = self.promotion {
            config.promotion = promotion;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

fn build_game(config: &PlayConfig) -> anyhow::Result<Game> {
    let game = match &config.fen {
        Some(fen) => Game::from_fen(fen)
            .with_context(|| format!("Invalid start position: {}", fen))?,
        None => Game::new(),
    };
    let game = game.with_ai(config.ai_color.color());
    let game = match (config.promotion.fixed_piece(), config.seed) {
        (Some(piece), _) => game.with_promotion_policy(FixedPromotion(piece)),
        (None, Some(seed)) => game.with_promotion_policy(RandomPromotion::seeded(seed)),
        (None, None) => game,
    };
    Ok(game)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone();
    let mut config = PlayConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    args.apply(&mut config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting chess-play");
    tracing::info!("Config: {:?}", config_path);
    tracing::info!("Engine side: {:?}, depth {}", config.ai_color, config.depth);

    let game = build_game(&config)?;
    let mut session = Session::new(game, config.depth);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    tracing::info!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Square};

    #[test]
    fn flags_override_file_settings() {
        let args = Args::parse_from([
            "chess-play",
            "--depth",
            "1",
            "--ai-color",
            "white",
            "--promotion",
            "rook",
        ]);
        assert_eq!(args.config, PathBuf::from("chess.toml"));

        let mut config = PlayConfig {
            seed: Some(5),
            ..PlayConfig::default()
        };
        args.apply(&mut config);
        assert_eq!(config.depth, 1);
        assert_eq!(config.ai_color, AiSide::White);
        assert_eq!(config.promotion, PromotionChoice::Rook);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn build_game_from_config() {
        let config = PlayConfig {
            ai_color: AiSide::None,
            fen: Some("4k3/8/8/8/8/8/8/4K3 b - - 0 1".to_string()),
            ..PlayConfig::default()
        };
        let game = build_game(&config).unwrap();
        assert_eq!(game.ai_color(), None);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.piece_at(Square::E8).is_some());
    }

    #[test]
    fn build_game_rejects_bad_fen() {
        let config = PlayConfig {
            fen: Some("8/8/8/8/8/8/8/8 w - - 0 1".to_string()),
            ..PlayConfig::default()
        };
        assert!(build_game(&config).is_err());
    }
}
