use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowRecord {
    pub source_address: String,
    pub destination_address: String,
    pub source_port: String,
    pub destination_port: String,
}

impl std::fmt::Display for FlowRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.source_address, self.source_port, self.destination_address, self.destination_port
        )
    }
}

/// Records parsed from one text body, plus the number of lines rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlows {
    pub records: Vec<FlowRecord>,
    pub bad_lines: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("'=>' has no endpoint on one side")]
    MissingArrowOperand,

    #[error("expected at least {required} columns, found {found}")]
    TooFewColumns { found: usize, required: usize },

    #[error("endpoint '{endpoint}' has no port")]
    MissingPort { endpoint: String },
}

/// Token positions of the endpoints in a columnar flow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub source_column: usize,
    pub destination_column: usize,
    pub min_columns: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            source_column: 7,
            destination_column: 9,
            min_columns: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
