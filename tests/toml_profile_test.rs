use a11y_lint::config::toml_config::TomlConfig;
use a11y_lint::{LintEngine, LintPipeline, LocalStorage};
use tempfile::TempDir;

fn write_chart_config(temp_dir: &TempDir) -> String {
    let chart_config = serde_json::json!({
        "palette": ["#000000"],
        "background": "#ffffff",
        "chart_html": "<table><tr><th>Month</th></tr></table><svg role=\"img\"><desc>Sales</desc></svg>",
        "chart_elements": {"series": 1, "gridlines": 2, "legend_entries": 1, "encodings": 1},
        "interactions": {"keyboard": true, "touch_targets": [50], "focus_indicators": true},
        "chart_props": {"zoom_200": true, "mobile_adaptive": true, "svg_scalable": true}
    });
    let config_path = temp_dir.path().join("chart-config.json");
    std::fs::write(&config_path, chart_config.to_string()).unwrap();
    config_path.to_str().unwrap().to_string()
}

fn profile(endpoint: &str, output_path: &str, extra: &str) -> String {
    format!(
        r#"
[profile]
name = "chart-audit"
description = "Integration profile"
version = "1.0"

[source]
type = "file"
endpoint = "{}"
{}
[report]
output_path = "{}"
"#,
        endpoint, extra, output_path
    )
}

#[tokio::test]
async fn test_end_to_end_audit_from_toml_profile() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let endpoint = write_chart_config(&temp_dir);

    let config = TomlConfig::from_toml_str(&profile(&endpoint, &output_path, "")).unwrap();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LintPipeline::new(storage, config);
    let engine = LintEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let full_path = std::path::Path::new(&output_path).join("a11y_report.zip");
    assert!(full_path.exists());

    let zip_data = std::fs::read(&full_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    let mut report_file = archive.by_name("report.json").unwrap();
    let mut report_content = String::new();
    std::io::Read::read_to_string(&mut report_file, &mut report_content).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report_content).unwrap();

    assert_eq!(report["total_score"], 15);
}

#[tokio::test]
async fn test_profile_threshold_override_changes_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let endpoint = write_chart_config(&temp_dir);

    // 50px targets fail once the profile demands 60px
    let checks = "\n[checks]\nmin_touch_target = 60\n";
    let config = TomlConfig::from_toml_str(&profile(&endpoint, &output_path, checks)).unwrap();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LintPipeline::new(storage, config);
    let engine = LintEngine::new(pipeline);

    engine.run().await.unwrap();

    let zip_data =
        std::fs::read(std::path::Path::new(&output_path).join("a11y_report.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    let mut report_file = archive.by_name("report.json").unwrap();
    let mut report_content = String::new();
    std::io::Read::read_to_string(&mut report_file, &mut report_content).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report_content).unwrap();

    assert_eq!(report["motor_accessibility"]["touch_targets"]["pass"], false);
    assert_eq!(report["motor_accessibility"]["score"], 2);
}

#[tokio::test]
async fn test_strict_profile_fails_run_on_findings() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let endpoint = write_chart_config(&temp_dir);

    let extra = "\n[checks]\nmin_touch_target = 60\n";
    let mut config = TomlConfig::from_toml_str(&profile(&endpoint, &output_path, extra)).unwrap();
    config.report.strict = Some(true);

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LintPipeline::new(storage, config);
    let engine = LintEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(
        result,
        Err(a11y_lint::LintError::ChecksFailed { count: 1 })
    ));
}
