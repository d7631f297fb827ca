use super::traits::ConfigSection;
use crate::error::PanmixiaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
    /// Only report allele frequencies for this locus
    pub locus: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            output: None,
            locus: None,
        }
    }
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), PanmixiaError> {
        if let Some(path) = &self.output {
            if path.as_os_str().is_empty() {
                return Err(PanmixiaError::Configuration(
                    "Report output path must not be empty".to_string()
                ));
            }
        }
        Ok(())
    }
}
