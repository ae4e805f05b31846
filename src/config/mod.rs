pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Thresholds;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "a11y-lint")]
#[command(about = "Accessibility linter for data visualization configurations")]
pub struct CliConfig {
    /// Path or HTTP(S) URL of the chart configuration JSON
    #[arg(long, default_value = "chart-config.json")]
    pub config: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Minimum contrast ratio against the background (WCAG AA text)
    #[arg(long, default_value = "4.5")]
    pub text_contrast: f64,

    /// Minimum contrast ratio between adjacent palette colors
    #[arg(long, default_value = "3.0")]
    pub graphic_contrast: f64,

    /// Fail the run when any checkpoint fails
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the report JSON to stdout
    #[arg(long)]
    pub print_report: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.config
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn thresholds(&self) -> Thresholds {
        Thresholds {
            text_contrast: self.text_contrast,
            graphic_contrast: self.graphic_contrast,
            ..Thresholds::default()
        }
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn print_report(&self) -> bool {
        self.print_report
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("config", &self.config)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("text_contrast", self.text_contrast, 1.0, 21.0)?;
        validation::validate_range("graphic_contrast", self.graphic_contrast, 1.0, 21.0)?;
        Ok(())
    }
}
