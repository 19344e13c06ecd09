// src/models/numeric.rs

use std::f64::consts::PI;

use tracing::debug;

use crate::config::parameters::NumericParameters;
use crate::math::error::MathError;
use crate::math::integrator::euler_step;
use crate::models::trajectory::{Point2, Trajectory};

/// 回転座標系での振り子の運動方程式の係数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoriolisCoefficients {
    pub coriolis: f64,  // 2 * Ω * sin(φ)
    pub restoring: f64, // g / L
}

impl CoriolisCoefficients {
    pub fn new(params: &NumericParameters) -> Self {
        let omega = (2.0 * PI) / params.day_length;
        let phi = (params.latitude / 180.0) * PI;
        let sphi = phi.sin();
        CoriolisCoefficients {
            coriolis: 2.0 * omega * sphi,
            restoring: params.g / params.length,
        }
    }

    /// x 方向加速度 2Ω sinφ * vy - (g/L) * x
    #[inline]
    pub fn acceleration_x(&self, vy: f64, x: f64) -> f64 {
        self.coriolis * vy - self.restoring * x
    }

    /// y 方向加速度 -2Ω sinφ * vx - (g/L) * y
    #[inline]
    pub fn acceleration_y(&self, vx: f64, y: f64) -> f64 {
        -self.coriolis * vx - self.restoring * y
    }
}

/// 振り子のおもりの状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub ax: f64,
    pub ay: f64,
}

impl PendulumState {
    /// 初期状態（x は糸の長さの 1/100）
    pub fn initial(params: &NumericParameters, coefficients: &CoriolisCoefficients) -> Self {
        let x = params.initial_x();
        let y = params.initial_y;
        let vx = params.initial_vx;
        let vy = params.initial_vy;
        PendulumState {
            x,
            y,
            vx,
            vy,
            ax: coefficients.acceleration_x(vy, x),
            ay: coefficients.acceleration_y(vx, y),
        }
    }

    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// 1ステップ進めた状態を返す
    ///
    /// 前ステップの速度・位置から加速度を求め、速度、位置の順に更新する。
    /// 位置の更新には更新後の速度を使う。
    pub fn step(&self, coefficients: &CoriolisCoefficients, dt: f64) -> Self {
        let ax = coefficients.acceleration_x(self.vy, self.x);
        let ay = coefficients.acceleration_y(self.vx, self.y);
        let vx = euler_step(self.vx, ax, dt);
        let vy = euler_step(self.vy, ay, dt);
        PendulumState {
            x: euler_step(self.x, vx, dt),
            y: euler_step(self.y, vy, dt),
            vx,
            vy,
            ax,
            ay,
        }
    }
}

/// 数値積分によるフーコーの振り子の軌跡
///
/// # 引数
/// - `params`: 数値積分モデルのパラメータ
///
/// # 戻り値
/// - 長さ floor(day_length / dt) の軌跡。先頭は初期位置。
pub fn compute_numeric(params: &NumericParameters) -> Result<Trajectory, MathError> {
    params.validate()?;

    let coefficients = CoriolisCoefficients::new(params);
    let steps = params.step_count();
    debug!(steps, dt = params.dt, "数値積分を開始");

    let mut state = PendulumState::initial(params, &coefficients);
    let mut points = Vec::with_capacity(steps);
    points.push(state.position());
    for _ in 1..steps {
        state = state.step(&coefficients, params.dt);
        points.push(state.position());
    }

    Ok(Trajectory::from(points))
}
