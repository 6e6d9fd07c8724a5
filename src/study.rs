//! Resolution studies of the manufactured problem.
//!
//! Both the error study and the solution study run the same per-resolution
//! pipeline: build operator, discretize right-hand side, solve, diagnose.

use crate::{
  convergence::{mean_abs_error, ErrorSeries, PowerLawFit},
  error::Result,
  forcing::{discretize_f, discretize_g},
  kernel::Kernel,
  lattice::{point_of_index, LatticePoint},
  operator::build_operator,
  solve::{solve, SpectralDiagnostics},
  Resolution,
};

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
  /// coupling constant in front of the integral operator
  pub lambda: f64,
  /// processed in the given order
  pub resolutions: Vec<Resolution>,
  /// directory receiving the plot data
  pub output_dir: PathBuf,
}
impl StudyConfig {
  pub fn error_study() -> Self {
    Self {
      lambda: 1.0,
      resolutions: vec![4, 8, 16, 32, 64],
      output_dir: PathBuf::from("out"),
    }
  }
  pub fn solution_study() -> Self {
    Self {
      resolutions: vec![4, 16, 64],
      ..Self::error_study()
    }
  }
}
impl Default for StudyConfig {
  fn default() -> Self {
    Self::error_study()
  }
}

/// Everything computed for a single resolution.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
  pub n: Resolution,
  pub solution: na::DVector<f64>,
  pub exact: na::DVector<f64>,
  pub diagnostics: SpectralDiagnostics,
  pub error: f64,
}
impl ResolutionResult {
  /// Lattice points together with approximate and exact solution value.
  pub fn samples(&self) -> impl Iterator<Item = (LatticePoint, f64, f64)> + '_ {
    (0..self.n.pow(2)).map(move |i| {
      (
        point_of_index(i, self.n),
        self.solution[i],
        self.exact[i],
      )
    })
  }
}

/// Solves the manufactured problem on the lattice of resolution `n`.
///
/// The dense operator only lives for the duration of this call.
pub fn solve_resolution(
  n: Resolution,
  kernel: &impl Kernel,
  lambda: f64,
) -> Result<ResolutionResult> {
  let g = discretize_g(n, lambda)?;
  let exact = discretize_f(n)?;

  let (solution, diagnostics) = {
    let operator = build_operator(n, kernel, lambda)?;
    let solution = solve(&operator, &g)?;
    let diagnostics = SpectralDiagnostics::compute(&operator);
    (solution, diagnostics)
  };

  let error = mean_abs_error(&solution, &exact)?;
  tracing::info!(
    n,
    condition_number = diagnostics.condition_number,
    min_eigenvalue = diagnostics.min_eigenvalue_magnitude,
    error,
    "solved resolution"
  );

  Ok(ResolutionResult {
    n,
    solution,
    exact,
    diagnostics,
    error,
  })
}

#[derive(Debug, Clone)]
pub struct ErrorStudy {
  pub results: Vec<ResolutionResult>,
  pub series: ErrorSeries,
  pub fit: PowerLawFit,
}
impl ErrorStudy {
  pub fn diagnostics(&self) -> impl Iterator<Item = &SpectralDiagnostics> {
    self.results.iter().map(|r| &r.diagnostics)
  }
  pub fn result(&self, n: Resolution) -> Option<&ResolutionResult> {
    self.results.iter().find(|r| r.n == n)
  }
}

/// Mean absolute error for every configured resolution and its power law fit.
pub fn run_error_study(config: &StudyConfig, kernel: &impl Kernel) -> Result<ErrorStudy> {
  let mut series = ErrorSeries::new();
  let mut results = Vec::with_capacity(config.resolutions.len());
  for &n in &config.resolutions {
    let result = solve_resolution(n, kernel, config.lambda)?;
    series.push(n, result.error);
    results.push(result);
  }
  let fit = series.fit()?;
  tracing::info!(slope = fit.slope, intercept = fit.intercept, "fitted power law");
  Ok(ErrorStudy {
    results,
    series,
    fit,
  })
}

/// Full solutions for every configured resolution, for comparison against the exact surface.
pub fn run_solution_study(
  config: &StudyConfig,
  kernel: &impl Kernel,
) -> Result<Vec<ResolutionResult>> {
  config
    .resolutions
    .iter()
    .map(|&n| solve_resolution(n, kernel, config.lambda))
    .collect()
}
