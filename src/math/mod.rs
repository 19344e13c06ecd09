// src/math/mod.rs

pub mod complex;
pub mod error;
pub mod integrator;
pub mod range;

pub use complex::complex_exp;
pub use error::MathError;
pub use integrator::euler_step;
pub use range::{arange, TimeRange};
