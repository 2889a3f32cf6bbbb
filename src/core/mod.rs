pub mod aggregator;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{FlowRecord, ParsedFlows};
pub use crate::domain::ports::{ConfigProvider, FlowExporter, Pipeline, Storage};
pub use crate::utils::error::Result;
