use crate::core::checks::color::hex_to_rgb;
use crate::utils::error::{LintError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LintError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A config source is either an HTTP(S) URL or a local file path.
pub fn validate_source(field_name: &str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        validate_url(field_name, value)
    } else {
        validate_path(field_name, value)
    }
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    hex_to_rgb(value)
        .map(|_| ())
        .map_err(|e| LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: e.user_friendly_message(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LintError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source", "https://example.com").is_ok());
        assert!(validate_url("source", "http://example.com").is_ok());
        assert!(validate_url("source", "").is_err());
        assert!(validate_url("source", "invalid-url").is_err());
        assert!(validate_url("source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_source_accepts_paths_and_urls() {
        assert!(validate_source("config", "charts/config.json").is_ok());
        assert!(validate_source("config", "https://example.com/config.json").is_ok());
        assert!(validate_source("config", "ftp://example.com/config.json").is_err());
        assert!(validate_source("config", "").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("background", "#ffffff").is_ok());
        assert!(validate_hex_color("background", "1f77b4").is_ok());
        assert!(validate_hex_color("background", "#fff").is_err());
        assert!(validate_hex_color("background", "#gggggg").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("text_contrast", 4.5, 1.0, 21.0).is_ok());
        assert!(validate_range("text_contrast", 0.5, 1.0, 21.0).is_err());
        assert!(validate_range("text_contrast", 22.0, 1.0, 21.0).is_err());
    }
}
