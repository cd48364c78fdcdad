use crate::error::{ReportError, Result};
use crate::report::VerdictThresholds;
use crate::view::ViewOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub verdict: VerdictConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_notices: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VerdictConfig {
    pub suspicious: f64,
    pub spam: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_notices: true,
            format: OutputFormat::Text,
        }
    }
}

impl Default for VerdictConfig {
    fn default() -> Self {
        let thresholds = VerdictThresholds::default();
        Self {
            suspicious: thresholds.suspicious,
            spam: thresholds.spam,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ReportError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let VerdictConfig { suspicious, spam } = self.verdict;
        if !suspicious.is_finite() || !spam.is_finite() || suspicious > spam {
            return Err(ReportError::InvalidThresholds { suspicious, spam });
        }

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ReportError::Config(format!("Invalid logging level {:?}: {}", self.logging.level, e))
        })?;

        Ok(())
    }

    pub fn thresholds(&self) -> VerdictThresholds {
        VerdictThresholds {
            suspicious: self.verdict.suspicious,
            spam: self.verdict.spam,
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_notices: self.display.show_notices,
        }
    }
}
