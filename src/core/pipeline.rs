use crate::core::checks::{
    CognitiveChecks, ColorChecks, MotorChecks, ResponsiveChecks, ScreenReaderChecks,
};
use crate::core::{AuditOutput, ChartConfig, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{AuditReport, SummaryRow};
use crate::utils::error::{LintError, Result};
use reqwest::Client;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct LintPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> LintPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LintPipeline<S, C> {
    async fn gather(&self) -> Result<ChartConfig> {
        let source = self.config.source();

        if source.starts_with("http://") || source.starts_with("https://") {
            // 遠端配置透過 HTTP 取得
            tracing::debug!("Fetching chart config from: {}", source);
            let response = self.client.get(source).send().await?;

            tracing::debug!("Config response status: {}", response.status());

            if !response.status().is_success() {
                return Err(LintError::ProcessingError {
                    message: format!(
                        "Config endpoint '{}' returned status {}",
                        source,
                        response.status()
                    ),
                });
            }

            Ok(response.json().await?)
        } else {
            tracing::debug!("Reading chart config from: {}", source);
            let content = std::fs::read_to_string(source)?;
            Ok(serde_json::from_str(&content)?)
        }
    }

    async fn audit(&self, config: ChartConfig) -> Result<AuditOutput> {
        let thresholds = self.config.thresholds();
        let ChartConfig {
            palette,
            background,
            chart_html,
            chart_elements,
            interactions,
            chart_props,
        } = config;
        let background = background.unwrap_or_else(|| "#ffffff".to_string());

        tracing::debug!(
            "Auditing palette of {} colors against background {}",
            palette.len(),
            background
        );

        let color_accessibility = ColorChecks::new(palette, background).run_all(&thresholds)?;
        let screen_reader_accessibility = ScreenReaderChecks::new(chart_html).run_all();
        let cognitive_accessibility = CognitiveChecks::new(chart_elements).run_all(&thresholds);
        let motor_accessibility = MotorChecks::new(interactions).run_all(&thresholds);
        let responsive_accessibility = ResponsiveChecks::new(chart_props).run_all();

        let total_score = color_accessibility.score
            + screen_reader_accessibility.score
            + cognitive_accessibility.score
            + motor_accessibility.score
            + responsive_accessibility.score;

        let report = AuditReport {
            color_accessibility,
            screen_reader_accessibility,
            cognitive_accessibility,
            motor_accessibility,
            responsive_accessibility,
            total_score,
            generated_at: chrono::Utc::now(),
        };

        let rows = summary_rows(&report);
        let csv_summary = render_delimited(&rows, b',')?;
        let tsv_summary = render_delimited(&rows, b'\t')?;
        let failing: Vec<SummaryRow> = rows.into_iter().filter(|row| !row.passed).collect();

        tracing::debug!("{} checkpoints failing", failing.len());

        Ok(AuditOutput {
            report,
            csv_summary,
            tsv_summary,
            failing,
        })
    }

    async fn report(&self, output: AuditOutput) -> Result<String> {
        let output_path = format!("{}/a11y_report.zip", self.config.output_path());

        if self.config.print_report() {
            println!("{}", serde_json::to_string_pretty(&output.report)?);
        }

        tracing::debug!(
            "Creating report bundle with {} files",
            3 + usize::from(!output.failing.is_empty())
        );

        // 建立 ZIP 報告
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("report.json", FileOptions::default())?;
            zip.write_all(serde_json::to_string_pretty(&output.report)?.as_bytes())?;

            zip.start_file::<_, ()>("summary.csv", FileOptions::default())?;
            zip.write_all(output.csv_summary.as_bytes())?;

            zip.start_file::<_, ()>("summary.tsv", FileOptions::default())?;
            zip.write_all(output.tsv_summary.as_bytes())?;

            // 僅在有失敗項目時輸出 failing.json
            if !output.failing.is_empty() {
                zip.start_file::<_, ()>("failing.json", FileOptions::default())?;
                zip.write_all(serde_json::to_string_pretty(&output.failing)?.as_bytes())?;
            }

            // 完成並取回底層 Vec<u8>
            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing report bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file("a11y_report.zip", &zip_data).await?;

        if self.config.strict() && !output.failing.is_empty() {
            return Err(LintError::ChecksFailed {
                count: output.failing.len(),
            });
        }

        Ok(output_path)
    }
}

fn summary_rows(report: &AuditReport) -> Vec<SummaryRow> {
    let mut rows = Vec::new();

    let color = &report.color_accessibility;
    rows.push(SummaryRow {
        pillar: "color".to_string(),
        checkpoint: "palette_safety".to_string(),
        passed: color.palette_safety.safe,
        detail: color.palette_safety.message.clone(),
    });
    for check in &color.background_contrast {
        rows.push(SummaryRow {
            pillar: "color".to_string(),
            checkpoint: "background_contrast".to_string(),
            passed: check.pass,
            detail: format!("{}: {:.2}", check.color, check.ratio),
        });
    }
    for check in &color.adjacent_contrast {
        rows.push(SummaryRow {
            pillar: "color".to_string(),
            checkpoint: "adjacent_contrast".to_string(),
            passed: check.pass,
            detail: format!("{} / {}: {:.2}", check.pair.0, check.pair.1, check.ratio),
        });
    }
    rows.push(SummaryRow {
        pillar: "color".to_string(),
        checkpoint: "grayscale_test".to_string(),
        passed: color.grayscale_test.unique,
        detail: format!("luminances: {:?}", color.grayscale_test.luminances),
    });

    let screen_reader = &report.screen_reader_accessibility;
    rows.push(SummaryRow {
        pillar: "screen_reader".to_string(),
        checkpoint: "alt_text".to_string(),
        passed: screen_reader.alt_text.has_img_alt || screen_reader.alt_text.has_desc,
        detail: format!(
            "img_alt={}, desc={}",
            screen_reader.alt_text.has_img_alt, screen_reader.alt_text.has_desc
        ),
    });
    rows.push(SummaryRow {
        pillar: "screen_reader".to_string(),
        checkpoint: "aria_roles".to_string(),
        passed: !screen_reader.aria_roles.roles.is_empty(),
        detail: if screen_reader.aria_roles.roles.is_empty() {
            "none".to_string()
        } else {
            screen_reader.aria_roles.roles.join(", ")
        },
    });
    rows.push(SummaryRow {
        pillar: "screen_reader".to_string(),
        checkpoint: "semantic_table".to_string(),
        passed: screen_reader.semantic_table.has_table && screen_reader.semantic_table.has_th,
        detail: format!(
            "table={}, th={}",
            screen_reader.semantic_table.has_table, screen_reader.semantic_table.has_th
        ),
    });

    let cognitive = &report.cognitive_accessibility;
    rows.push(SummaryRow {
        pillar: "cognitive".to_string(),
        checkpoint: "legend_entries".to_string(),
        passed: cognitive.legend_entries.pass,
        detail: format!("{} entries", cognitive.legend_entries.legend_entries),
    });
    rows.push(SummaryRow {
        pillar: "cognitive".to_string(),
        checkpoint: "layout_complexity".to_string(),
        passed: cognitive.layout_complexity.pass,
        detail: format!("{} encodings", cognitive.layout_complexity.encodings),
    });

    let motor = &report.motor_accessibility;
    rows.push(SummaryRow {
        pillar: "motor".to_string(),
        checkpoint: "keyboard_support".to_string(),
        passed: motor.keyboard_support.keyboard,
        detail: format!("keyboard={}", motor.keyboard_support.keyboard),
    });
    rows.push(SummaryRow {
        pillar: "motor".to_string(),
        checkpoint: "touch_targets".to_string(),
        passed: motor.touch_targets.pass,
        detail: format!("sizes: {:?}", motor.touch_targets.touch_sizes),
    });
    rows.push(SummaryRow {
        pillar: "motor".to_string(),
        checkpoint: "focus_indicators".to_string(),
        passed: motor.focus_indicators.focus_indicators,
        detail: format!("visible={}", motor.focus_indicators.focus_indicators),
    });

    let responsive = &report.responsive_accessibility;
    rows.push(SummaryRow {
        pillar: "responsive".to_string(),
        checkpoint: "zoom_behavior".to_string(),
        passed: responsive.zoom_behavior.zoom_200,
        detail: format!("zoom_200={}", responsive.zoom_behavior.zoom_200),
    });
    rows.push(SummaryRow {
        pillar: "responsive".to_string(),
        checkpoint: "mobile_layout".to_string(),
        passed: responsive.mobile_layout.mobile_adaptive,
        detail: format!("mobile_adaptive={}", responsive.mobile_layout.mobile_adaptive),
    });
    rows.push(SummaryRow {
        pillar: "responsive".to_string(),
        checkpoint: "svg_scalable".to_string(),
        passed: responsive.svg_scalable.svg_scalable,
        detail: format!("svg_scalable={}", responsive.svg_scalable.svg_scalable),
    });

    rows
}

fn render_delimited(rows: &[SummaryRow], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| LintError::ProcessingError {
        message: format!("Summary buffer error: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| LintError::ProcessingError {
        message: format!("Summary encoding error: {}", e),
    })
}
