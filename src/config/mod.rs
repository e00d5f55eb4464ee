//! Configuration management module
//!
//! This module handles loading and saving the application configuration.
//! The file `Kardoo.appconfig` lives next to the running executable so the
//! application stays portable; a missing or corrupt file falls back to defaults.

pub mod manager;
pub mod models;

pub use manager::{CONFIG_FILE_NAME, ConfigStore};
pub use models::{AppConfig, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WindowGeometry};
