// src/simulation/sampler.rs

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::models::trajectory::{Point2, Trajectory};

/// 数値解の描画で使う間引き幅
pub const DEFAULT_STRIDE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(stride) => stride,
    None => panic!("stride must be non-zero"),
};

/// カーソルが保持する軌跡（残像）の最大点数
pub const TRAIL_CAPACITY: usize = 100;

/// 間引き方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// 全点をそのまま返す
    Full,
    /// `stride` 点ごとに間引き、全点を走査するカーソルを付ける
    Strided { stride: NonZeroUsize },
}

impl SampleMode {
    pub fn strided(stride: usize) -> Self {
        match NonZeroUsize::new(stride) {
            Some(stride) => SampleMode::Strided { stride },
            None => SampleMode::Full,
        }
    }
}

impl Default for SampleMode {
    fn default() -> Self {
        SampleMode::Strided {
            stride: DEFAULT_STRIDE,
        }
    }
}

/// 描画用に整形した点列
///
/// 元の軌跡への参照は持たず、必要な点をコピーして保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSeries {
    pub tail: Vec<Point2>,
    pub stride: NonZeroUsize,
    pub cursor: Option<Cursor>,
}

impl SampledSeries {
    /// `tail[position]` に対応する元の軌跡の index
    pub fn source_index(&self, position: usize) -> usize {
        position * self.stride.get()
    }

    /// (元の軌跡の index, 点) の組
    pub fn indexed_tail(&self) -> impl Iterator<Item = (usize, &Point2)> + '_ {
        self.tail
            .iter()
            .enumerate()
            .map(|(position, point)| (self.source_index(position), point))
    }
}

/// 軌跡を描画用の点列に変換する
///
/// # 引数
/// - `trajectory`: モデルが出力した軌跡
/// - `mode`: 間引き方法
///
/// # 戻り値
/// - `Full` なら全点、`Strided` なら index 0, stride, 2*stride, ... の点と
///   間引き前の全点を走査するカーソル
pub fn sample(trajectory: &Trajectory, mode: SampleMode) -> SampledSeries {
    match mode {
        SampleMode::Full => SampledSeries {
            tail: trajectory.points().to_vec(),
            stride: NonZeroUsize::MIN,
            cursor: None,
        },
        SampleMode::Strided { stride } => SampledSeries {
            tail: trajectory.iter().step_by(stride.get()).copied().collect(),
            stride,
            cursor: Some(Cursor::new(trajectory.points().to_vec())),
        },
    }
}

/// アニメーションで動かす現在位置
///
/// 間引き前の全点を1点ずつ進む。通過した点は最大 [`TRAIL_CAPACITY`] 点まで
/// 残像として保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    points: Vec<Point2>,
    index: usize,
    trail: VecDeque<Point2>,
}

impl Cursor {
    pub fn new(points: Vec<Point2>) -> Self {
        Cursor {
            points,
            index: 0,
            trail: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn current(&self) -> Option<Point2> {
        self.points.get(self.index).copied()
    }

    /// 次の点へ進み、その点を返す。終端では `None`。
    pub fn advance(&mut self) -> Option<Point2> {
        if self.is_finished() {
            return None;
        }
        if let Some(previous) = self.current() {
            if self.trail.len() == TRAIL_CAPACITY {
                self.trail.pop_front();
            }
            self.trail.push_back(previous);
        }
        self.index += 1;
        self.current()
    }

    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.points.len()
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.trail.clear();
    }

    /// 直近に通過した点（古い順）
    pub fn trail(&self) -> impl Iterator<Item = &Point2> + '_ {
        self.trail.iter()
    }
}
