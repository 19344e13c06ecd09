// src/models/mod.rs

pub mod analytical;
pub mod numeric;
pub mod trajectory;

pub use analytical::compute_analytical;
pub use numeric::compute_numeric;
pub use trajectory::{Point2, Trajectory};
