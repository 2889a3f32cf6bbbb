use crate::domain::model::{ColumnLayout, OutputFormat};
use crate::utils::error::{FlowError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub exporter: ExporterConfig,
    #[serde(default)]
    pub columnar: ColumnLayout,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    pub program: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_n: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FlowError::NotFound {
                path: path.display().to_string(),
            },
            _ => FlowError::Io(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FlowError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

pub fn validate_layout(layout: &ColumnLayout) -> Result<()> {
    let widest = layout.source_column.max(layout.destination_column);
    if layout.min_columns <= widest {
        return Err(FlowError::InvalidConfigValue {
            field: "columnar.min_columns".to_string(),
            value: layout.min_columns.to_string(),
            reason: format!("Must be greater than the highest endpoint column ({})", widest),
        });
    }
    Ok(())
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(program) = &self.exporter.program {
            validate_non_empty_string("exporter.program", program)?;
        }
        if let Some(top_n) = self.report.top_n {
            validate_positive_number("report.top_n", top_n, 1)?;
        }
        validate_layout(&self.columnar)
    }
}
