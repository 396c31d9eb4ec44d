//! Configuration from `config.toml` and the environment

mod config;

pub use config::{Config, CONFIG_DIR_VAR, LONG_OPTIONS_VAR};
#[cfg(feature = "binmode")]
pub use config::BINMODE_VAR;
