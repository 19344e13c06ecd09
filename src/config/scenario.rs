// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::{AnalyticalParameters, NumericParameters};
use crate::math::error::MathError;
use crate::math::range::TimeRange;

/// 使用するモデルの種類
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Analytical,
    Numeric,
}

/// シナリオ全体
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Scenario {
    pub model: ModelKind,
    pub analytical: AnalyticalInstance,
    pub numeric: NumericParameters,
    pub sampling: SamplingSettings,
}

/// 解析解モデルの設定（時刻列は範囲で指定）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyticalInstance {
    pub g: f64,
    pub length: f64,
    pub earth_rate: f64,
    pub latitude: f64,
    pub k1: f64,
    pub k2: f64,
    pub time: TimeRange,
}

impl Default for AnalyticalInstance {
    fn default() -> Self {
        let defaults = AnalyticalParameters::default();
        AnalyticalInstance {
            g: defaults.g,
            length: defaults.length,
            earth_rate: defaults.earth_rate,
            latitude: defaults.latitude,
            k1: defaults.k1,
            k2: defaults.k2,
            time: TimeRange::default(),
        }
    }
}

impl AnalyticalInstance {
    /// 時刻列を展開してモデル入力に変換する
    pub fn to_parameters(&self) -> Result<AnalyticalParameters, MathError> {
        Ok(AnalyticalParameters {
            g: self.g,
            length: self.length,
            earth_rate: self.earth_rate,
            latitude: self.latitude,
            k1: self.k1,
            k2: self.k2,
            times: self.time.samples()?,
        })
    }
}

/// 描画用の間引き設定
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SamplingSettings {
    pub stride: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings { stride: 5 }
    }
}
