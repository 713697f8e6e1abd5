//! AeroGame Tools library

pub mod common;
pub mod config;
pub mod play;

pub use common::{init_logging, load_config, save_config, TimingArgs};
pub use config::GameConfig;
pub use play::{run_play, PlayStats};
