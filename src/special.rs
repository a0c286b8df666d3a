//! # Special
//!
//! $$
//! \Phi(z)=\tfrac{1}{2}\operatorname{erfc}\left(-z/\sqrt{2}\right),\quad
//! \operatorname{logit}(p)=\log\frac{p}{1-p}
//! $$
//!
use std::f64::consts::FRAC_1_SQRT_2;

use statrs::function::erf::erfc;

/// ln(sqrt(2π)), the normalizing constant of the standard normal density.
const LN_SQRT_2PI: f64 = 0.9189385332046727;

/// `erfc` underflows below this z; switch to the asymptotic tail expansion.
const ASYMPTOTIC_Z: f64 = -37.0;

/// Stable `log(1 - x)`, exact for x near 0.
pub fn log1m(x: f64) -> f64 {
  (-x).ln_1p()
}

/// Logit transform, `log(p / (1 - p))`, mapping (0,1) to the real line.
///
/// Computed as `log(p) - log1m(p)` so both tails stay accurate; p = 0 and
/// p = 1 map to -inf and +inf.
pub fn logit(p: f64) -> f64 {
  p.ln() - log1m(p)
}

/// Standard normal log-density, `-z²/2 - log(sqrt(2π))`.
pub fn std_normal_lpdf(z: f64) -> f64 {
  -0.5 * z * z - LN_SQRT_2PI
}

/// Standard normal log-CDF, `log Φ(z)`, stable over the whole real line.
///
/// The upper half goes through `log1p(-Φ(-z))` so values near `log(1)` keep
/// full precision; the lower half evaluates `log(0.5 erfc(-z/√2))` directly
/// and switches to the Mills-ratio expansion
/// `log φ(z) - log(-z) + log1p(-1/z² + 3/z⁴)` once `erfc` would underflow.
pub fn std_normal_lcdf(z: f64) -> f64 {
  if z >= 0.0 {
    (-0.5 * erfc(z * FRAC_1_SQRT_2)).ln_1p()
  } else if z > ASYMPTOTIC_Z {
    (0.5 * erfc(-z * FRAC_1_SQRT_2)).ln()
  } else {
    let zi2 = 1.0 / (z * z);
    std_normal_lpdf(z) - (-z).ln() + (zi2 * (3.0 * zi2 - 1.0)).ln_1p()
  }
}

/// Standard normal log-complementary-CDF, `log(1 - Φ(z))`.
///
/// Evaluated as `log Φ(-z)`, which avoids the cancellation of forming
/// `1 - Φ(z)` deep in the upper tail.
pub fn std_normal_lccdf(z: f64) -> f64 {
  std_normal_lcdf(-z)
}
