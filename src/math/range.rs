// src/math/range.rs

use serde::Deserialize;

use crate::math::error::MathError;

/// 時刻列の生成範囲
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange {
            start: 0.0,
            end: 223.0,
            step: 0.5,
        }
    }
}

impl TimeRange {
    pub fn samples(&self) -> Result<Vec<f64>, MathError> {
        arange(self.start, self.end, self.step)
    }
}

/// 時刻列の最大点数
pub const MAX_SAMPLES: usize = 100_000_000;

/// 等間隔の数列を生成する
///
/// `end < start` の場合は `step` の符号を反転する。値は `start += step` の
/// 逐次加算で求めるため、丸め誤差の蓄積も含めて再現される。
/// `end` は範囲に含まれる。
///
/// # 引数
/// - `start`: 始点
/// - `end`: 終点（含む）
/// - `step`: 刻み幅（非ゼロ）
///
/// # 戻り値
/// - 生成した数列。点数が [`MAX_SAMPLES`] を超える場合や、刻み幅が小さすぎて
///   値が進まない場合は `InvalidRange`
pub fn arange(start: f64, end: f64, step: f64) -> Result<Vec<f64>, MathError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(MathError::InvalidRange { start, end });
    }
    if step == 0.0 || !step.is_finite() {
        return Err(MathError::ZeroStep);
    }

    let step = if end < start { -step } else { step };
    let toward_end = (step > 0.0 && end >= start) || (step < 0.0 && end <= start);
    if toward_end && ((end - start) / step).abs() >= MAX_SAMPLES as f64 {
        return Err(MathError::InvalidRange { start, end });
    }

    let in_range = |value: f64| if step > 0.0 { end >= value } else { end <= value };
    let mut range = Vec::new();
    let mut value = start;
    while in_range(value) {
        range.push(value);
        let next = value + step;
        // 刻み幅が value の分解能より小さいと値が進まない
        if next == value {
            return Err(MathError::InvalidRange { start, end });
        }
        value = next;
    }
    Ok(range)
}
