use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct LintEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> LintEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting accessibility audit...");

        // Gather
        println!("Gathering chart configuration...");
        let config = self.pipeline.gather().await?;
        println!("Loaded configuration with {} palette colors", config.palette.len());
        self.monitor.log_stats("Gather");

        // Audit
        println!("Running accessibility checks...");
        let output = self.pipeline.audit(config).await?;
        println!(
            "Total score: {}/15 ({} failing checks)",
            output.report.total_score,
            output.failing.len()
        );
        self.monitor.log_stats("Audit");

        // Report
        println!("Writing report...");
        let output_path = self.pipeline.report(output).await?;
        println!("Report saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
