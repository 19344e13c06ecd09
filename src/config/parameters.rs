// src/config/parameters.rs

use serde::Deserialize;

use crate::math::error::{ensure_finite, ensure_positive, MathError};
use crate::math::range::TimeRange;

/// 解析解モデルのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyticalParameters {
    pub g: f64,          // 重力加速度 (m/s²)
    pub length: f64,     // 振り子の糸の長さ (m)
    pub earth_rate: f64, // 地球の自転角速度 R
    pub latitude: f64,   // 緯度（sin にそのまま渡される）
    pub k1: f64,         // 正回転成分の振幅
    pub k2: f64,         // 逆回転成分の振幅
    pub times: Vec<f64>, // サンプル時刻 (s)
}

impl Default for AnalyticalParameters {
    fn default() -> Self {
        AnalyticalParameters {
            g: 9.81,
            length: 67.0 / 10.0,
            earth_rate: 0.1,
            latitude: 3.0,
            k1: 1.0,
            k2: 1.0,
            times: TimeRange::default().samples().unwrap_or_default(),
        }
    }
}

impl AnalyticalParameters {
    /// 計算前の入力検証
    pub fn validate(&self) -> Result<(), MathError> {
        ensure_positive("g", self.g)?;
        ensure_positive("length", self.length)?;
        ensure_finite("earth_rate", self.earth_rate)?;
        ensure_finite("latitude", self.latitude)?;
        ensure_finite("k1", self.k1)?;
        ensure_finite("k2", self.k2)?;
        if self.times.is_empty() {
            return Err(MathError::EmptyTimeSeries);
        }
        if let Some(t) = self.times.iter().find(|t| !t.is_finite()) {
            return Err(MathError::invalid("times", format!("有限値ではありません ({t})")));
        }
        Ok(())
    }

    /// 角振動数 sqrt(g / L)
    pub fn angular_frequency(&self) -> f64 {
        (self.g / self.length).sqrt()
    }
}

/// 数値積分のステップ数の上限
pub const MAX_STEPS: usize = 100_000_000;

/// 数値積分モデルのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NumericParameters {
    pub latitude: f64,   // 緯度 (度)
    pub day_length: f64, // 1日の長さ (s)
    pub dt: f64,         // 時間刻み (s)
    pub g: f64,          // 重力加速度 (m/s²)
    pub length: f64,     // 振り子の糸の長さ (m)
    pub initial_y: f64,  // y 初期位置 (m)
    pub initial_vx: f64, // x 方向初速度 (m/s)
    pub initial_vy: f64, // y 方向初速度 (m/s)
}

impl Default for NumericParameters {
    fn default() -> Self {
        NumericParameters {
            latitude: 49.0,
            day_length: 86400.0,
            dt: 1.0,
            g: 9.81,
            length: 67.0 / 10.0,
            initial_y: 0.1,
            initial_vx: 0.0,
            initial_vy: 0.0,
        }
    }
}

impl NumericParameters {
    /// 計算前の入力検証
    pub fn validate(&self) -> Result<(), MathError> {
        ensure_finite("latitude", self.latitude)?;
        ensure_positive("day_length", self.day_length)?;
        ensure_positive("dt", self.dt)?;
        ensure_positive("g", self.g)?;
        ensure_positive("length", self.length)?;
        ensure_finite("initial_y", self.initial_y)?;
        ensure_finite("initial_vx", self.initial_vx)?;
        ensure_finite("initial_vy", self.initial_vy)?;
        let ratio = self.day_length / self.dt;
        if !ratio.is_finite() || ratio >= (MAX_STEPS + 1) as f64 {
            return Err(MathError::invalid(
                "dt",
                format!("ステップ数 day_length / dt = {ratio} が上限 {MAX_STEPS} を超えています"),
            ));
        }
        if self.step_count() == 0 {
            return Err(MathError::invalid(
                "dt",
                format!("day_length ({}) を超えています ({})", self.day_length, self.dt),
            ));
        }
        Ok(())
    }

    /// 積分ステップ数 floor(day_length / dt)
    pub fn step_count(&self) -> usize {
        (self.day_length / self.dt).floor() as usize
    }

    /// x 初期位置（糸の長さの 1/100）
    pub fn initial_x(&self) -> f64 {
        self.length / 100.0
    }
}
