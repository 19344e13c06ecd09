// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{AnalyticalParameters, NumericParameters};
pub use scenario::{AnalyticalInstance, ModelKind, SamplingSettings, Scenario};
