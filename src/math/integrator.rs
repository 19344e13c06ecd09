// src/math/integrator.rs

/// 前進Euler法による1ステップの積分
///
/// # 引数
/// - `current`: 現在の値 y_n
/// - `derivative`: 微分値 f
/// - `dt`: 時間刻み
///
/// # 戻り値
/// - 次の値 y_{n+1} = y_n + f * dt
#[inline]
pub fn euler_step(current: f64, derivative: f64, dt: f64) -> f64 {
    current + derivative * dt
}
