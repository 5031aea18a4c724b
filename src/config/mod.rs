//! Configuration module.
//!
//! - [`loader`]: TOML config file and the Defaults → File → Env → CLI chain
//! - [`deck_loader`]: slide deck files
//! - [`keybindings`]: key → action map

pub mod deck_loader;
pub mod keybindings;
pub mod loader;

pub use deck_loader::{load_deck, load_deck_or_builtin, parse_deck, DeckError, DeckFormat};
pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};
