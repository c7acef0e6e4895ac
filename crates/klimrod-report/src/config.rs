//! Report tool configuration.

use std::path::{Path, PathBuf};

use klimrod_types::{DistributionPolicy, DEFAULT_POOL_LABEL};
use serde::{Deserialize, Serialize};

/// Complete report tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report defaults.
    #[serde(default)]
    pub report: ReportSection,
    /// Recipe costing.
    #[serde(default)]
    pub costing: CostingSection,
    /// Payroll generation.
    #[serde(default)]
    pub payroll: PayrollSection,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Defaults applied to event sheets that leave them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Restaurant to close events under when none is given on the command line.
    #[serde(default = "default_restaurant_id")]
    pub restaurant_id: String,
    /// Policy used when a sheet does not name one.
    #[serde(default)]
    pub default_policy: DistributionPolicy,
    /// Label given to unlabeled gratuity pools.
    #[serde(default = "default_pool_label")]
    pub pool_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostingSection {
    /// Kitchen labor cost per hour.
    #[serde(default = "default_hourly_labor_rate")]
    pub hourly_labor_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSection {
    /// Taxes and deductions withheld from gross pay, 0-100.
    #[serde(default = "default_tax_percentage")]
    pub tax_percentage: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace" | "debug" | "info" | "warn" | "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions

fn default_restaurant_id() -> String {
    "REST1".to_string()
}

fn default_pool_label() -> String {
    DEFAULT_POOL_LABEL.to_string()
}

fn default_hourly_labor_rate() -> f64 {
    20.0
}

fn default_tax_percentage() -> f64 {
    15.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            restaurant_id: default_restaurant_id(),
            default_policy: DistributionPolicy::default(),
            pool_label: default_pool_label(),
        }
    }
}

impl Default for CostingSection {
    fn default() -> Self {
        Self {
            hourly_labor_rate: default_hourly_labor_rate(),
        }
    }
}

impl Default for PayrollSection {
    fn default() -> Self {
        Self {
            tax_percentage: default_tax_percentage(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it is missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: ReportConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// `$KLIMROD_CONFIG`, else `klimrod.toml` in the working directory.
    fn config_path() -> PathBuf {
        std::env::var("KLIMROD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("klimrod.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.report.restaurant_id, "REST1");
        assert_eq!(config.report.default_policy, DistributionPolicy::Percentage);
        assert_eq!(config.report.pool_label, "Gratuity");
        assert_eq!(config.costing.hourly_labor_rate, 20.0);
        assert_eq!(config.payroll.tax_percentage, 15.0);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ReportConfig = toml::from_str(
            r#"
            [report]
            default_policy = "equal"

            [payroll]
            tax_percentage = 12.5
            "#,
        )
        .expect("parse");
        assert_eq!(config.report.default_policy, DistributionPolicy::Equal);
        assert_eq!(config.payroll.tax_percentage, 12.5);
        assert_eq!(config.costing.hourly_labor_rate, 20.0);
        assert_eq!(config.report.restaurant_id, "REST1");
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = ReportConfig::default();
        let toml_str = toml::to_string(&config).expect("serialize");
        let _parsed: ReportConfig = toml::from_str(&toml_str).expect("parse");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ReportConfig::load_from(Path::new("/nonexistent/klimrod.toml"))
            .expect("defaults");
        assert_eq!(config.report.restaurant_id, "REST1");
    }
}
