//! Output formatting for extraction results

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// What one successful extraction produced
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub version_code: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,
}

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for extraction reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &ExtractReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &ExtractReport) -> String {
        let mut out = format!("{}: {}", report.key, report.version_code);
        if let Some(flavor) = &report.flavor {
            out.push_str(&format!(" (flavor: {})", flavor));
        }
        if let Some(path) = &report.source_file {
            out.push_str(&format!("\nsource: {}", path.display()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ExtractReport {
        ExtractReport {
            version_code: "42".to_string(),
            key: "versionCode".to_string(),
            flavor: Some("paid".to_string()),
            source_file: Some(PathBuf::from("app/build.gradle")),
        }
    }

    #[test]
    fn test_json_output() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&sample_report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version_code"], "42");
        assert_eq!(parsed["flavor"], "paid");
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let report = ExtractReport {
            version_code: "7".to_string(),
            key: "versionCode".to_string(),
            flavor: None,
            source_file: None,
        };
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("flavor").is_none());
        assert!(parsed.get("source_file").is_none());
    }

    #[test]
    fn test_yaml_output() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&sample_report()).unwrap();
        assert!(output.contains("version_code: '42'"));
    }

    #[test]
    fn test_human_output() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format(&sample_report()).unwrap();
        assert!(output.contains("versionCode: 42"));
        assert!(output.contains("flavor: paid"));
        assert!(output.contains("app/build.gradle"));
    }
}
