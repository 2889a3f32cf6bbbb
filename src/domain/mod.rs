// Domain layer: flow models and ports. No dependencies beyond serde/thiserror.

pub mod model;
pub mod ports;
