// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("パラメータ `{name}` が不正です: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("時刻列が空です。")]
    EmptyTimeSeries,
    #[error("時刻列の刻み幅はゼロにできません。")]
    ZeroStep,
    #[error("時刻列の範囲が不正です: start={start}, end={end}")]
    InvalidRange { start: f64, end: f64 },
    #[error("数値解が発散しました (index = {index})")]
    NumericInstability { index: usize },
}

impl MathError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MathError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// 正の有限値であることを確認する
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), MathError> {
    if !value.is_finite() {
        return Err(MathError::invalid(name, format!("有限値ではありません ({value})")));
    }
    if value <= 0.0 {
        return Err(MathError::invalid(name, format!("正の値が必要です ({value})")));
    }
    Ok(())
}

/// 有限値であることを確認する
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), MathError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MathError::invalid(name, format!("有限値ではありません ({value})")))
    }
}
