use crate::domain::model::{AuditOutput, ChartConfig, Thresholds};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn thresholds(&self) -> Thresholds;
    fn strict(&self) -> bool;
    fn print_report(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn gather(&self) -> Result<ChartConfig>;
    async fn audit(&self, config: ChartConfig) -> Result<AuditOutput>;
    async fn report(&self, output: AuditOutput) -> Result<String>;
}
