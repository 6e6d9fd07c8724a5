//! Discretization error and its algebraic convergence in the resolution $n$.

use crate::{error::Result, Error, Resolution};

use itertools::Itertools;

/// Mean absolute deviation $1/N sum_i abs(x_i - f_i)$.
pub fn mean_abs_error(approx: &na::DVector<f64>, exact: &na::DVector<f64>) -> Result<f64> {
  if approx.len() != exact.len() {
    return Err(Error::DimensionMismatch {
      expected: exact.len(),
      found: approx.len(),
    });
  }
  if approx.is_empty() {
    return Err(Error::EmptyInput);
  }
  Ok((approx - exact).lp_norm(1) / approx.len() as f64)
}

/// Power law $e(n) = 10^b n^a$, a line in log-log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
  /// exponent $a$, the slope in log-log space
  pub slope: f64,
  /// $b$, the intercept of $log_10 e$ at $n = 1$
  pub intercept: f64,
}
impl PowerLawFit {
  pub fn eval(&self, n: f64) -> f64 {
    10f64.powf(self.slope * n.log10() + self.intercept)
  }
}

/// Least-squares fit of $log_10 e = a log_10 n + b$.
pub fn fit_power_law(ns: &[f64], errors: &[f64]) -> Result<PowerLawFit> {
  if ns.len() != errors.len() {
    return Err(Error::DimensionMismatch {
      expected: ns.len(),
      found: errors.len(),
    });
  }
  if ns.len() < 2 {
    return Err(Error::DegenerateFit("at least two points are required"));
  }
  if ns.iter().chain(errors).any(|&v| !(v > 0.0 && v.is_finite())) {
    return Err(Error::DegenerateFit("log-log fit requires positive finite values"));
  }

  let logx: Vec<f64> = ns.iter().map(|n| n.log10()).collect();
  let logy: Vec<f64> = errors.iter().map(|e| e.log10()).collect();

  let npoints = logx.len() as f64;
  let mean_x = logx.iter().sum::<f64>() / npoints;
  let mean_y = logy.iter().sum::<f64>() / npoints;

  let sxx: f64 = logx.iter().map(|x| (x - mean_x).powi(2)).sum();
  let sxy: f64 = logx
    .iter()
    .zip(&logy)
    .map(|(x, y)| (x - mean_x) * (y - mean_y))
    .sum();
  if sxx == 0.0 {
    return Err(Error::DegenerateFit("all resolutions are identical"));
  }

  let slope = sxy / sxx;
  let intercept = mean_y - slope * mean_x;
  Ok(PowerLawFit { slope, intercept })
}

/// Observed algebraic convergence rate between two consecutive resolutions.
///
/// Positive if the error decreases.
pub fn algebraic_convergence_rate(next: (Resolution, f64), prev: (Resolution, f64)) -> f64 {
  let (n_next, e_next) = next;
  let (n_prev, e_prev) = prev;
  let quot = e_next / e_prev;
  let refinement = n_next as f64 / n_prev as f64;
  -quot.ln() / refinement.ln()
}

/// Append-only list of `(n, error)` pairs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorSeries {
  entries: Vec<(Resolution, f64)>,
}
impl ErrorSeries {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, n: Resolution, error: f64) {
    self.entries.push((n, error));
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
  pub fn entries(&self) -> &[(Resolution, f64)] {
    &self.entries
  }
  pub fn ns(&self) -> Vec<f64> {
    self.entries.iter().map(|&(n, _)| n as f64).collect()
  }
  pub fn errors(&self) -> Vec<f64> {
    self.entries.iter().map(|&(_, e)| e).collect()
  }

  pub fn fit(&self) -> Result<PowerLawFit> {
    fit_power_law(&self.ns(), &self.errors())
  }

  /// Convergence rate of each entry with respect to its predecessor.
  pub fn rates(&self) -> Vec<f64> {
    self
      .entries
      .iter()
      .tuple_windows()
      .map(|(&prev, &next)| algebraic_convergence_rate(next, prev))
      .collect()
  }
}
