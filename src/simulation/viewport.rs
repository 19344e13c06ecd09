// src/simulation/viewport.rs

use crate::models::trajectory::Point2;

/// 数値解プロットの初期表示範囲 (±m)
pub const NUMERIC_VIEW_LIMIT: f64 = 0.15;
/// 解析解プロットの表示範囲
pub const ANALYTICAL_VIEW_LIMIT: f64 = 2.0;

/// 原点中心の正方形の表示範囲 [-limit, limit]²
///
/// カーソルが範囲外に出ると範囲を2倍に広げる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    default_limit: f64,
    limit: f64,
}

impl Viewport {
    pub fn new(default_limit: f64) -> Self {
        Viewport {
            default_limit,
            limit: default_limit,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn contains(&self, point: Point2) -> bool {
        (-self.limit..=self.limit).contains(&point.x) && (-self.limit..=self.limit).contains(&point.y)
    }

    /// 1フレーム分の更新。範囲外なら1回だけ2倍にする。
    pub fn fit(&mut self, point: Point2) -> f64 {
        if !self.contains(point) {
            self.limit *= 2.0;
        }
        self.limit
    }

    pub fn reset(&mut self) {
        self.limit = self.default_limit;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(NUMERIC_VIEW_LIMIT)
    }
}
