//! Manufactured solution and right-hand side of the integral equation.
//!
//! The exact solution is $f(x,y) = (x - x^3)(y - y^3)$.
//! Since both $f$ and the exponential kernel factorize over the axes,
//! the convolution $integral K f$ is the product $h(x) h(y)$ with
//! $h(x) = integral_0^1 e^(-abs(x - t)_TT) (t - t^3) dif t$,
//! which is known in closed form.

use crate::{error::Result, lattice::Lattice, Error, Resolution};

use std::f64::consts::E;

pub fn exact_solution(x: f64, y: f64) -> f64 {
  (x - x.powi(3)) * (y - y.powi(3))
}

/// The one-dimensional factor $h$ of the convolved exact solution.
///
/// Only defined on $[0,1]$, has a different analytic branch on each half.
pub fn rhs_factor(x: f64) -> Result<f64> {
  let sqrt_e = E.sqrt();
  if (0.0..0.5).contains(&x) {
    Ok(
      -3.0 * (-x).exp() - 2.0 * x * (5.0 + x.powi(2))
        + (1.0 + 2.0 * x) * (21.0 + 4.0 * x * (1.0 + x)) / (4.0 * sqrt_e),
    )
  } else if (0.5..=1.0).contains(&x) {
    Ok(
      9.0 * (x - 1.0).exp() - 2.0 * x * (5.0 + x.powi(2))
        + (2.0 * x - 1.0) * (21.0 + 4.0 * x * (x - 1.0)) / (4.0 * sqrt_e),
    )
  } else {
    Err(Error::Domain { x })
  }
}

/// Applies [`rhs_factor`] element-wise, failing on the first argument outside of the domain.
pub fn rhs_factor_vec(xs: &[f64]) -> Result<Vec<f64>> {
  xs.iter().map(|&x| rhs_factor(x)).collect()
}

/// Right-hand side $g = f + lambda h(x) h(y)$ of the integral equation.
pub fn rhs(x: f64, y: f64, lambda: f64) -> Result<f64> {
  Ok(exact_solution(x, y) + lambda * rhs_factor(x)? * rhs_factor(y)?)
}

/// Exact solution sampled on the lattice, in row-major order.
pub fn discretize_f(n: Resolution) -> Result<na::DVector<f64>> {
  let lattice = Lattice::new(n)?;
  Ok(na::DVector::from_iterator(
    lattice.npoints(),
    lattice.points().map(|p| exact_solution(p.x, p.y)),
  ))
}

/// Right-hand side sampled on the lattice, in row-major order.
pub fn discretize_g(n: Resolution, lambda: f64) -> Result<na::DVector<f64>> {
  let lattice = Lattice::new(n)?;

  // h only depends on a single axis, so it's evaluated once per grid coordinate.
  let factors = rhs_factor_vec(&lattice.coords())?;
  let coords = lattice.coords();

  let mut g = na::DVector::zeros(lattice.npoints());
  for (i, (&x, &hx)) in coords.iter().zip(&factors).enumerate() {
    for (j, (&y, &hy)) in coords.iter().zip(&factors).enumerate() {
      g[i * n + j] = exact_solution(x, y) + lambda * hx * hy;
    }
  }
  Ok(g)
}
