//! Direct solution of the dense operator system and its spectral diagnostics.

use crate::{
  error::Result,
  linalg::{faercol2navec, namat2faermat},
  Error,
};

use faer::{complex_native::c64, solvers::SpSolver};

/// Partial-pivoting LU factorization of a dense square matrix.
pub struct FaerDenseLu {
  raw: faer::solvers::PartialPivLu<f64>,
  dim: usize,
}
impl FaerDenseLu {
  pub fn new(a: &na::DMatrix<f64>) -> Result<Self> {
    if !a.is_square() {
      return Err(Error::DimensionMismatch {
        expected: a.nrows(),
        found: a.ncols(),
      });
    }
    let raw = namat2faermat(a).partial_piv_lu();
    Ok(Self {
      raw,
      dim: a.nrows(),
    })
  }

  pub fn dim(&self) -> usize {
    self.dim
  }

  pub fn solve(&self, b: &na::DVector<f64>) -> Result<na::DVector<f64>> {
    if b.len() != self.dim {
      return Err(Error::DimensionMismatch {
        expected: self.dim,
        found: b.len(),
      });
    }
    let b = faer::col::from_slice(b.as_slice());
    let x = self.raw.solve(b);
    Ok(faercol2navec(x.as_ref()))
  }
}

/// Solves $A x = b$ directly.
///
/// No safeguard against (near) singular matrices. Their solution simply
/// comes out with huge or non-finite entries, which [`SpectralDiagnostics`]
/// is meant to explain.
pub fn solve(a: &na::DMatrix<f64>, b: &na::DVector<f64>) -> Result<na::DVector<f64>> {
  let x = FaerDenseLu::new(a)?.solve(b)?;
  if x.iter().any(|v| !v.is_finite()) {
    tracing::warn!("solution of {}x{} system is not finite", a.nrows(), a.ncols());
  }
  Ok(x)
}

/// Magnitudes of all (possibly complex) eigenvalues.
///
/// Uses the general dense eigensolver of faer, no symmetry is assumed.
pub fn eigenvalue_magnitudes(a: &na::DMatrix<f64>) -> Vec<f64> {
  namat2faermat(a)
    .eigenvalues::<c64>()
    .into_iter()
    .map(|eig| eig.abs())
    .collect()
}

fn magnitude_ratio(magnitudes: &[f64]) -> (f64, f64, f64) {
  let max = magnitudes.iter().copied().fold(0.0, f64::max);
  let min = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
  (max / min, min, max)
}

/// Ratio between the largest and smallest eigenvalue magnitude.
pub fn spectral_radius_ratio(a: &na::DMatrix<f64>) -> f64 {
  magnitude_ratio(&eigenvalue_magnitudes(a)).0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralDiagnostics {
  pub condition_number: f64,
  pub min_eigenvalue_magnitude: f64,
  pub max_eigenvalue_magnitude: f64,
}
impl SpectralDiagnostics {
  pub fn compute(a: &na::DMatrix<f64>) -> Self {
    let (condition_number, min_eigenvalue_magnitude, max_eigenvalue_magnitude) =
      magnitude_ratio(&eigenvalue_magnitudes(a));
    Self {
      condition_number,
      min_eigenvalue_magnitude,
      max_eigenvalue_magnitude,
    }
  }
}
