use crate::domain::model::{ColumnLayout, FlowRecord, OutputFormat, ParsedFlows};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Turns a binary flow capture into pipe-delimited text.
pub trait FlowExporter {
    fn export(&self, input: &Path) -> Result<String>;
}

pub trait ConfigProvider {
    fn exporter_program(&self) -> &str;
    fn column_layout(&self) -> ColumnLayout;
    fn top_n(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn work_dir(&self) -> &str;
}

pub trait Pipeline {
    /// Flows obtained by running the exporter on the capture.
    fn extract(&self, input: &Path) -> Result<Vec<FlowRecord>>;
    /// Flows parsed from the capture's companion text file.
    fn transform(&self, input: &Path) -> Result<ParsedFlows>;
    fn top_n(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
}
