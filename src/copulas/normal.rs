//! # Normal copula
//!
//! $$
//! \log c(u,v;\rho)=\frac{\rho\left(2uv-\rho(u^2+v^2)\right)}{2(1-\rho^2)}
//! -\frac{1}{2}\log\left(1-\rho^2\right)
//! $$
//!
use ndarray::Array1;
use ndarray::Array2;
use rand::Rng;
use rand_distr::Distribution;
use statrs::distribution::ContinuousCDF;
use statrs::distribution::Normal;

use crate::special::log1m;

/// Gaussian copula log-density contribution for one pair of marginals.
///
/// `u` and `v` are the Φ-transformed marginals of the coupled observations
/// (callers pass `Φ(x_std)` of the standardized data); the quadratic form
/// consumes them exactly as passed. The bivariate standard-normal density
/// over the product of its marginal densities collapses to
///
/// `log c = 0.5 ρ (-2uv + ρu² + ρv²) / (ρ² - 1) - 0.5 log1p(-ρ²)`
///
/// which is exactly 0 when rho = 0. |rho| >= 1 yields NaN or an infinity,
/// never a panic.
pub fn normal_copula(u: f64, v: f64, rho: f64) -> f64 {
  0.5 * rho * (-2.0 * u * v + rho * u * u + rho * v * v) / (rho * rho - 1.0)
    - 0.5 * log1m(rho * rho)
}

/// Gaussian copula log-density summed over paired vectors of marginals,
/// equal to the sum of [`normal_copula`] over the pairs.
///
/// The quadratic form is reduced to three dot products so the
/// rho-dependent coefficients and the normalizing constant are evaluated
/// once instead of per element. Empty vectors yield 0.0.
///
/// Panics if the vectors differ in length.
pub fn normal_copula_vector(u: &Array1<f64>, v: &Array1<f64>, rho: f64) -> f64 {
  assert_eq!(u.len(), v.len(), "u and v must have the same length");

  let a1 = 0.5 * rho;
  let a2 = rho * rho - 1.0;
  let a3 = 0.5 * log1m(rho * rho);
  let x = -2.0 * u.dot(v) + rho * (u.dot(u) + v.dot(v));

  a1 * x / a2 - u.len() as f64 * a3
}

/// Bivariate Gaussian copula sampler with latent correlation `rho`.
///
/// Draws are `(u, v)` pairs of uniform marginals on (0,1) whose dependence
/// is the Gaussian copula. Feeding them back through `Φ⁻¹` recovers a
/// correlated standard-normal pair.
#[derive(Debug, Clone, Copy)]
pub struct NormalCopula2D {
  /// Correlation of the latent Gaussian pair, -1 < rho < 1.
  pub rho: f64,
}

impl NormalCopula2D {
  pub fn new(rho: f64) -> Self {
    assert!(
      rho > -1.0 && rho < 1.0,
      "correlation must lie strictly inside (-1, 1), got {}",
      rho
    );
    Self { rho }
  }

  /// Kendall's tau implied by the latent correlation, `2 asin(rho) / π`.
  pub fn kendall_tau(&self) -> f64 {
    2.0 * self.rho.asin() / std::f64::consts::PI
  }

  /// Draws `n` dependent uniform pairs as an `(n, 2)` array, one pair per
  /// row.
  pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
    let mut out = Array2::<f64>::zeros((n, 2));
    for i in 0..n {
      let (u, v) = self.sample(rng);
      out[[i, 0]] = u;
      out[[i, 1]] = v;
    }
    out
  }
}

impl Distribution<(f64, f64)> for NormalCopula2D {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    let z1 = std_normal.sample(rng);
    let z2 = std_normal.sample(rng);
    // second row of the Cholesky factor of the 2x2 correlation matrix
    let x2 = self.rho * z1 + (1.0 - self.rho * self.rho).sqrt() * z2;
    (std_normal.cdf(z1), std_normal.cdf(x2))
  }
}
