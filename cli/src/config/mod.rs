mod config;
mod game_mode;

pub use config::{Config, get_config_manager, load_config, resolve_path};
pub use game_mode::GameMode;
