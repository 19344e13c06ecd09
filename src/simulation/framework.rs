// src/simulation/framework.rs

use tracing::{info, warn};

use crate::config::scenario::{ModelKind, Scenario};
use crate::math::error::MathError;
use crate::models::analytical::compute_analytical;
use crate::models::numeric::compute_numeric;
use crate::models::trajectory::{Point2, Trajectory};
use crate::simulation::sampler::{sample, SampleMode, SampledSeries};
use crate::simulation::viewport::{Viewport, ANALYTICAL_VIEW_LIMIT, NUMERIC_VIEW_LIMIT};

/// シミュレーション結果
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub model: ModelKind,
    pub trajectory: Trajectory,
    pub series: SampledSeries,
}

/// アニメーションの1フレーム
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub frame: usize,
    pub point: Point2,
    pub limit: f64,
}

/// シナリオで指定されたモデルで軌跡を計算し、描画用に間引く
pub fn run_scenario(scenario: &Scenario) -> Result<SimulationOutput, MathError> {
    let (trajectory, mode) = match scenario.model {
        ModelKind::Analytical => {
            let params = scenario.analytical.to_parameters()?;
            (compute_analytical(&params)?, SampleMode::Full)
        }
        ModelKind::Numeric => (
            compute_numeric(&scenario.numeric)?,
            SampleMode::strided(scenario.sampling.stride),
        ),
    };
    info!(model = ?scenario.model, points = trajectory.len(), "軌跡を計算しました");

    if let Err(err) = trajectory.check_finite() {
        warn!("{err}: dt が大きすぎる可能性があります");
    }

    let series = sample(&trajectory, mode);
    Ok(SimulationOutput {
        model: scenario.model,
        trajectory,
        series,
    })
}

/// 初期表示範囲
pub fn default_viewport(model: ModelKind) -> Viewport {
    match model {
        ModelKind::Analytical => Viewport::new(ANALYTICAL_VIEW_LIMIT),
        ModelKind::Numeric => Viewport::new(NUMERIC_VIEW_LIMIT),
    }
}

/// 現在位置を先頭から最後まで動かしたときのフレーム列
///
/// カーソルがあればカーソルで全点を、なければ描画点列を順にたどる。
pub fn replay(output: &SimulationOutput) -> Vec<Frame> {
    let mut viewport = default_viewport(output.model);
    let mut frame_of = |frame: usize, point: Point2| Frame {
        frame,
        point,
        limit: viewport.fit(point),
    };

    match &output.series.cursor {
        Some(cursor) => {
            let mut cursor = cursor.clone();
            cursor.reset();
            let mut frames = Vec::with_capacity(cursor.len());
            if let Some(first) = cursor.current() {
                frames.push(frame_of(0, first));
            }
            while let Some(point) = cursor.advance() {
                frames.push(frame_of(cursor.index(), point));
            }
            frames
        }
        None => output
            .series
            .tail
            .iter()
            .enumerate()
            .map(|(frame, &point)| frame_of(frame, point))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parameters::NumericParameters;
    use crate::config::scenario::AnalyticalInstance;
    use crate::math::range::TimeRange;

    fn numeric_scenario() -> Scenario {
        Scenario {
            model: ModelKind::Numeric,
            numeric: NumericParameters {
                day_length: 23.0,
                dt: 1.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_run_analytical_scenario_keeps_all_points() {
        let scenario = Scenario {
            model: ModelKind::Analytical,
            analytical: AnalyticalInstance {
                time: TimeRange {
                    start: 0.0,
                    end: 10.0,
                    step: 0.5,
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let output = run_scenario(&scenario).unwrap();
        assert_eq!(output.trajectory.len(), 21);
        assert_eq!(output.series.tail.len(), 21);
        assert!(output.series.cursor.is_none());
        assert_eq!(output.series.tail[0], Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_run_numeric_scenario_is_strided() {
        let output = run_scenario(&numeric_scenario()).unwrap();
        assert_eq!(output.trajectory.len(), 23);
        assert_eq!(output.series.tail.len(), 5);
        assert_eq!(output.series.cursor.as_ref().map(|c| c.len()), Some(23));
    }

    #[test]
    fn test_run_scenario_propagates_invalid_parameter() {
        let mut scenario = numeric_scenario();
        scenario.numeric.dt = -1.0;
        assert!(matches!(
            run_scenario(&scenario),
            Err(MathError::InvalidParameter { name: "dt", .. })
        ));
    }

    /// 数値解のリプレイは間引き前の全点を1フレームずつ進む
    #[test]
    fn test_replay_numeric_visits_every_point() {
        let output = run_scenario(&numeric_scenario()).unwrap();
        let frames = replay(&output);
        assert_eq!(frames.len(), 23);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.frame, i);
            assert_eq!(frame.point, output.trajectory[i]);
            assert!(frame.limit >= NUMERIC_VIEW_LIMIT);
        }
    }

    /// 表示範囲は単調に広がる
    #[test]
    fn test_replay_limits_never_shrink() {
        let output = run_scenario(&numeric_scenario()).unwrap();
        let frames = replay(&output);
        assert!(frames.windows(2).all(|w| w[1].limit >= w[0].limit));
    }
}
