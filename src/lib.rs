// src/lib.rs

//! フーコーの振り子の軌跡計算
//!
//! - 解析解（複素指数関数による閉形式）: [`compute_analytical`]
//! - 数値解（前進Euler法による積分）: [`compute_numeric`]
//! - 描画用の間引き: [`sample`]

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{AnalyticalParameters, NumericParameters};
pub use math::MathError;
pub use models::{compute_analytical, compute_numeric, Point2, Trajectory};
pub use simulation::{sample, SampleMode, SampledSeries};
