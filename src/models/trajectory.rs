// src/models/trajectory.rs

use std::ops::Index;

use crate::math::error::MathError;

/// 平面上の位置 (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// 原点からの距離
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 振り子のおもりの軌跡
///
/// 時刻列（解析解）またはステップ番号（数値解）と同じ順序で並ぶ。
/// 生成後は変更されない。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    points: Vec<Point2>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// 発散（NaN / 無限大）の検出
    ///
    /// モデル側では検出しないため、必要な呼び出し側がこれを使う。
    pub fn check_finite(&self) -> Result<(), MathError> {
        match self.points.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(MathError::NumericInstability { index }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Point2>> for Trajectory {
    fn from(points: Vec<Point2>) -> Self {
        Trajectory { points }
    }
}

impl FromIterator<Point2> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Trajectory {
            points: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Trajectory {
    type Output = Point2;

    fn index(&self, index: usize) -> &Point2 {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_collect_and_index() {
        let trajectory: Trajectory = (0..4).map(|i| Point2::new(i as f64, -(i as f64))).collect();
        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory[2], Point2::new(2.0, -2.0));
        assert_eq!(trajectory.get(4), None);
        assert_eq!(trajectory.xs(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(trajectory.ys(), vec![0.0, -1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_check_finite_reports_first_bad_index() {
        let trajectory = Trajectory::from(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, f64::NAN),
            Point2::new(f64::INFINITY, 0.0),
        ]);
        assert_eq!(
            trajectory.check_finite(),
            Err(MathError::NumericInstability { index: 1 })
        );
    }

    #[test]
    fn test_point_norm() {
        assert_eq!(Point2::new(3.0, 4.0).norm(), 5.0);
    }
}
