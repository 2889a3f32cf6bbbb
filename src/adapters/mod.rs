// Adapters layer: concrete implementations for external systems (filesystem, exporter process).

pub mod exporter;
pub mod storage;
