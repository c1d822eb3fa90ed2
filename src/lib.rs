#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::{
    add, checked_add, normalize, normalize_with, palindromo, palindromo_with, NormalizationPolicy,
};
pub use utils::error::{CheckError, Result};
