//! Terminal media carousel - Entry Point

use carousel::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, load_deck_or_builtin,
    merge_config, CliOverrides,
};
use carousel::model::AppError;
use carousel::state::{CarouselOptions, WrapPolicy};
use carousel::view::{run_with_deck, ColorConfig, RunOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Auto-advancing media carousel for the terminal
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
#[command(about = "Auto-advancing, directional media carousel for the terminal")]
pub struct Args {
    /// Slide deck file (.toml or .json); the built-in deck is shown if omitted
    pub deck: Option<PathBuf>,

    /// Idle time before autoplay advances, in milliseconds (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub autoplay_ms: Option<u64>,

    /// Slide transition length in milliseconds
    #[arg(long)]
    pub speed_ms: Option<u64>,

    /// Stop at the first and last slide instead of wrapping
    #[arg(long)]
    pub no_loop: bool,

    /// Disable mouse drag navigation
    #[arg(long)]
    pub no_drag: bool,

    /// How wrap-around moves pick a direction (endpoints or shortest)
    #[arg(long)]
    pub wrap_policy: Option<WrapPolicy>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for flags the user actually passed.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            deck: self.deck.clone(),
            autoplay_delay_ms: self.autoplay_ms,
            transition_speed_ms: self.speed_ms,
            loop_enabled: self.no_loop.then_some(false),
            drag_enabled: self.no_drag.then_some(false),
            wrap_policy: self.wrap_policy,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.overrides()).validate()?
    };

    carousel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let deck = load_deck_or_builtin(config.deck.as_deref())?;
    info!(slides = deck.len(), "Deck loaded");

    let options = RunOptions {
        viewport: config.viewport_config(),
        carousel: CarouselOptions {
            motion: config.motion_config(),
            wrap_policy: config.wrap_policy,
        },
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    run_with_deck(deck, options)?;

    Ok(())
}
