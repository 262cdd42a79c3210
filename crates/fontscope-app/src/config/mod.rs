//! Configuration file parsing for fontscope
//!
//! Settings live in `<config_dir>/fontscope/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{
    apply_api_url_override, default_config_path, init_config_file, load_settings, API_URL_ENV,
};
pub use types::*;
