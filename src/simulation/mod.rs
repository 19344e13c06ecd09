// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;
pub mod sampler;
pub mod viewport;

pub use framework::{replay, run_scenario, Frame, SimulationOutput};
pub use sampler::{sample, Cursor, SampleMode, SampledSeries};
pub use viewport::Viewport;
