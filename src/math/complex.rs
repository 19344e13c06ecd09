// src/math/complex.rs

use num_complex::Complex64;

/// 複素指数関数
///
/// `e^(p + iq) = e^p * (cos q + i sin q)` の恒等式で評価する。
///
/// # 引数
/// - `z`: 指数 `p + iq`
///
/// # 戻り値
/// - `e^z`
pub fn complex_exp(z: Complex64) -> Complex64 {
    let scale = z.re.exp();
    Complex64::new(scale * z.im.cos(), scale * z.im.sin())
}
