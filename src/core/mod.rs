pub mod checks;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{AuditOutput, AuditReport, ChartConfig, Thresholds};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
