pub mod config;
pub mod files;

pub use config::{load_config, save_config, Config, ConfigError};
pub use files::{atomic_write, default_config_file, default_log_dir, ensure_dir};
