pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{exporter::CommandExporter, storage::LocalStorage};
pub use crate::config::Settings;
pub use crate::core::{engine::FlowEngine, pipeline::YafPipeline};
pub use crate::domain::model::{ColumnLayout, FlowRecord, OutputFormat, ParsedFlows};
pub use crate::utils::error::{FlowError, Result};
