pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{engine::LintEngine, pipeline::LintPipeline};
pub use utils::error::{LintError, Result};
