// src/models/analytical.rs

use num_complex::Complex64;

use crate::config::parameters::AnalyticalParameters;
use crate::math::complex::complex_exp;
use crate::math::error::MathError;
use crate::models::trajectory::{Point2, Trajectory};

/// 解析解によるフーコーの振り子の軌跡
///
/// 互いに逆回転する2つの円運動の重ね合わせ `k1 * a(t) + k2 * b(t)` に、
/// 地球の自転による回転 `c(t)` を掛けた複素数 `u(t)` の実部・虚部を
/// (x, y) とする。
///
/// ```text
/// a(t) = exp( i * sqrt(g/L) * t)
/// b(t) = exp(-i * sqrt(g/L) * t)
/// c(t) = exp( i * (-R * sin(latitude) * t))
/// u(t) = (k1 * a(t) + k2 * b(t)) * c(t)
/// ```
///
/// # 引数
/// - `params`: 解析解モデルのパラメータ
///
/// # 戻り値
/// - `params.times` と同じ長さの軌跡
pub fn compute_analytical(params: &AnalyticalParameters) -> Result<Trajectory, MathError> {
    params.validate()?;

    let omega = params.angular_frequency();
    let precession = params.earth_rate * params.latitude.sin();

    Ok(params
        .times
        .iter()
        .map(|&t| {
            let u = displacement(omega, precession, params.k1, params.k2, t);
            Point2::new(u.re, u.im)
        })
        .collect())
}

/// 時刻 t における複素変位 u(t)
fn displacement(omega: f64, precession: f64, k1: f64, k2: f64, t: f64) -> Complex64 {
    let a = complex_exp(Complex64::new(0.0, omega * t));
    let b = complex_exp(Complex64::new(0.0, -1.0 * omega * t));
    let c = complex_exp(Complex64::new(0.0, precession * -1.0 * t));
    (a * k1 + b * k2) * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_params() -> AnalyticalParameters {
        AnalyticalParameters {
            g: 9.81,
            length: 6.7,
            earth_rate: 0.1,
            latitude: 3.0,
            k1: 1.0,
            k2: 1.0,
            times: vec![0.0, 0.5, 1.0],
        }
    }

    /// t = 0 では a = b = c = 1 なので u = k1 + k2
    #[test]
    fn test_initial_point_is_amplitude_sum() {
        let trajectory = compute_analytical(&reference_params()).unwrap();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory[0].x, 2.0);
        assert_eq!(trajectory[0].y, 0.0);
    }

    /// 三角関数で直接書いた式と一致する
    #[test]
    fn test_matches_closed_form() {
        let params = reference_params();
        let trajectory = compute_analytical(&params).unwrap();
        let omega = (params.g / params.length).sqrt();
        let phase = -params.earth_rate * params.latitude.sin();
        for (point, &t) in trajectory.iter().zip(&params.times) {
            // k1 = k2 = 1 のとき u = 2 cos(ωt) * e^{i phase t}
            let amplitude = 2.0 * (omega * t).cos();
            assert_abs_diff_eq!(point.x, amplitude * (phase * t).cos(), epsilon = 1e-12);
            assert_abs_diff_eq!(point.y, amplitude * (phase * t).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_amplitudes_give_zero_trajectory() {
        let params = AnalyticalParameters {
            k1: 0.0,
            k2: 0.0,
            ..AnalyticalParameters::default()
        };
        let trajectory = compute_analytical(&params).unwrap();
        assert_eq!(trajectory.len(), params.times.len());
        assert!(trajectory.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    /// |u(t)| <= |k1| + |k2|
    #[test]
    fn test_magnitude_bounded_by_amplitudes() {
        for (k1, k2) in [(1.0, 1.0), (0.3, -1.2), (-2.0, 0.5), (0.0, 4.0)] {
            let params = AnalyticalParameters {
                k1,
                k2,
                latitude: 49.0,
                earth_rate: 0.7,
                ..AnalyticalParameters::default()
            };
            let bound = f64::abs(k1) + f64::abs(k2);
            let trajectory = compute_analytical(&params).unwrap();
            for point in &trajectory {
                assert!(point.norm() <= bound + 1e-12, "{point:?} exceeds {bound}");
            }
        }
    }

    #[test]
    fn test_length_matches_times() {
        let params = AnalyticalParameters {
            times: vec![0.0, 0.1, 0.1, 7.5, 100.0],
            ..AnalyticalParameters::default()
        };
        let trajectory = compute_analytical(&params).unwrap();
        assert_eq!(trajectory.len(), 5);
        // 同じ時刻には同じ点
        assert_eq!(trajectory[1], trajectory[2]);
    }

    #[test]
    fn test_deterministic() {
        let params = AnalyticalParameters::default();
        let first = compute_analytical(&params).unwrap();
        let second = compute_analytical(&params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_length_is_invalid_parameter() {
        let params = AnalyticalParameters {
            length: 0.0,
            ..reference_params()
        };
        assert!(matches!(
            compute_analytical(&params),
            Err(MathError::InvalidParameter { name: "length", .. })
        ));
    }

    #[test]
    fn test_empty_times_is_rejected() {
        let params = AnalyticalParameters {
            times: Vec::new(),
            ..reference_params()
        };
        assert_eq!(compute_analytical(&params), Err(MathError::EmptyTimeSeries));
    }
}
