use crate::core::ConfigProvider;
use crate::domain::model::Thresholds;
use crate::utils::error::{LintError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub profile: ProfileConfig,
    pub source: SourceConfig,
    pub checks: Option<ChecksConfig>,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksConfig {
    pub text_contrast: Option<f64>,
    pub graphic_contrast: Option<f64>,
    pub max_legend_entries: Option<u32>,
    pub max_encodings: Option<u32>,
    pub min_touch_target: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub print_report: Option<bool>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
    pub system_stats: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LintError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定檔
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 先處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LintError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONFIG_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證設定檔的合理性
    pub fn validate_config(&self) -> Result<()> {
        match self.source.r#type.as_str() {
            "url" => validation::validate_url("source.endpoint", &self.source.endpoint)?,
            "file" => validation::validate_path("source.endpoint", &self.source.endpoint)?,
            other => {
                return Err(LintError::InvalidConfigValueError {
                    field: "source.type".to_string(),
                    value: other.to_string(),
                    reason: "Supported source types: file, url".to_string(),
                })
            }
        }

        validation::validate_path("report.output_path", &self.report.output_path)?;

        if let Some(checks) = &self.checks {
            if let Some(ratio) = checks.text_contrast {
                validation::validate_range("checks.text_contrast", ratio, 1.0, 21.0)?;
            }
            if let Some(ratio) = checks.graphic_contrast {
                validation::validate_range("checks.graphic_contrast", ratio, 1.0, 21.0)?;
            }
        }

        Ok(())
    }

    /// 取得檢查門檻，缺少的欄位使用預設值
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.checks {
            Some(checks) => Thresholds {
                text_contrast: checks.text_contrast.unwrap_or(defaults.text_contrast),
                graphic_contrast: checks.graphic_contrast.unwrap_or(defaults.graphic_contrast),
                max_legend_entries: checks
                    .max_legend_entries
                    .unwrap_or(defaults.max_legend_entries),
                max_encodings: checks.max_encodings.unwrap_or(defaults.max_encodings),
                min_touch_target: checks.min_touch_target.unwrap_or(defaults.min_touch_target),
            },
            None => defaults,
        }
    }

    /// 取得輸出路徑
    pub fn output_path(&self) -> &str {
        &self.report.output_path
    }

    pub fn is_strict(&self) -> bool {
        self.report.strict.unwrap_or(false)
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn thresholds(&self) -> Thresholds {
        self.thresholds()
    }

    fn strict(&self) -> bool {
        self.is_strict()
    }

    fn print_report(&self) -> bool {
        self.report.print_report.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_profile() {
        let toml_content = r#"
[profile]
name = "dashboard-charts"
description = "Audit profile for dashboard charts"
version = "1.0.0"

[source]
type = "file"
endpoint = "charts/config.json"

[report]
output_path = "./audit-output"
strict = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.profile.name, "dashboard-charts");
        assert_eq!(config.source.endpoint, "charts/config.json");
        assert!(config.is_strict());
        assert!(!config.monitoring_enabled());
        assert_eq!(config.thresholds().text_contrast, 4.5);
    }

    #[test]
    fn test_checks_section_overrides_thresholds() {
        let toml_content = r#"
[profile]
name = "strict-charts"
description = "Tightened thresholds"
version = "1.0"

[source]
type = "file"
endpoint = "charts/config.json"

[checks]
text_contrast = 7.0
min_touch_target = 48

[report]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let thresholds = config.thresholds();

        assert_eq!(thresholds.text_contrast, 7.0);
        assert_eq!(thresholds.min_touch_target, 48);
        // Unset fields keep their defaults
        assert_eq!(thresholds.graphic_contrast, 3.0);
        assert_eq!(thresholds.max_legend_entries, 6);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CHART_CONFIG_URL", "https://charts.test/config.json");

        let toml_content = r#"
[profile]
name = "test"
description = "test"
version = "1.0"

[source]
type = "url"
endpoint = "${TEST_CHART_CONFIG_URL}"

[report]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://charts.test/config.json");

        std::env::remove_var("TEST_CHART_CONFIG_URL");
    }

    #[test]
    fn test_unknown_source_type_is_rejected() {
        let toml_content = r#"
[profile]
name = "test"
description = "test"
version = "1.0"

[source]
type = "ftp"
endpoint = "ftp://charts.test/config.json"

[report]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_source_requires_valid_url() {
        let toml_content = r#"
[profile]
name = "test"
description = "test"
version = "1.0"

[source]
type = "url"
endpoint = "not-a-url"

[report]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_contrast_is_rejected() {
        let toml_content = r#"
[profile]
name = "test"
description = "test"
version = "1.0"

[source]
type = "file"
endpoint = "charts/config.json"

[checks]
text_contrast = 42.0

[report]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[profile]
name = "file-test"
description = "File test"
version = "1.0"

[source]
type = "file"
endpoint = "charts/config.json"

[report]
output_path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.profile.name, "file-test");
    }
}
