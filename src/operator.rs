//! Assembly of the discretized integral operator $I + lambda K$.
//!
//! The integral $integral_(TT^2) K(norm(x - x')) f(x') dif x'$ is approximated by
//! the rectangle rule on the lattice, giving the weight $1/n^2$ per point.

use crate::{
  error::Result,
  kernel::Kernel,
  lattice::{toroidal_distance, Lattice},
  PointIdx, Resolution,
};

/// Entry $(i,j)$ of the discretized kernel operator $K$, without $lambda$ or identity.
pub fn operator_entry(
  lattice: &Lattice,
  i: PointIdx,
  j: PointIdx,
  kernel: &impl Kernel,
) -> f64 {
  let distance = toroidal_distance(lattice.point(i), lattice.point(j));
  lattice.cell_area() * kernel.eval(distance)
}

/// Builds the dense $n^2 times n^2$ matrix $I + lambda K$.
pub fn build_operator(
  n: Resolution,
  kernel: &impl Kernel,
  lambda: f64,
) -> Result<na::DMatrix<f64>> {
  let lattice = Lattice::new(n)?;
  let npoints = lattice.npoints();
  tracing::debug!("assembling {npoints}x{npoints} operator for n={n}");

  let mut operator = na::DMatrix::from_fn(npoints, npoints, |i, j| {
    lambda * operator_entry(&lattice, i, j, kernel)
  });
  for i in 0..npoints {
    operator[(i, i)] += 1.0;
  }
  Ok(operator)
}

/// The first column of $I + lambda K$.
///
/// Since the operator is a group cross-correlation over $ZZ_n times ZZ_n$,
/// this vector determines the whole matrix.
pub fn operator_filter(
  n: Resolution,
  kernel: &impl Kernel,
  lambda: f64,
) -> Result<na::DVector<f64>> {
  let lattice = Lattice::new(n)?;
  let mut filter = na::DVector::from_fn(lattice.npoints(), |j, _| {
    lambda * operator_entry(&lattice, 0, j, kernel)
  });
  filter[0] += 1.0;
  Ok(filter)
}

#[cfg(test)]
mod test {
  use super::{build_operator, operator_entry, operator_filter};
  use crate::{
    kernel::{exp_kernel, ExpKernel, Kernel},
    lattice::Lattice,
    linalg::assert_mat_eq,
    Error,
  };

  use approx::assert_relative_eq;

  #[test]
  fn zero_lambda_is_identity() {
    for n in 1..=5 {
      let operator = build_operator(n, &ExpKernel, 0.0).unwrap();
      let identity = na::DMatrix::identity(n * n, n * n);
      assert_eq!(operator, identity);
    }
  }

  #[test]
  fn diagonal_entries() {
    for n in 1..=5 {
      for lambda in [0.5, 1.0, 3.0] {
        let operator = build_operator(n, &ExpKernel, lambda).unwrap();
        let expected = 1.0 + lambda * ExpKernel.eval(0.0) / (n * n) as f64;
        for i in 0..n * n {
          assert_relative_eq!(operator[(i, i)], expected, max_relative = 1e-12);
        }
      }
    }
  }

  #[test]
  fn operator_n4() {
    let operator = build_operator(4, &ExpKernel, 1.0).unwrap();
    assert_eq!(operator.shape(), (16, 16));
    assert_relative_eq!(operator[(0, 0)], 1.0625);
    assert_relative_eq!(operator[(0, 1)], (-0.25f64).exp() / 16.0, max_relative = 1e-12);
    assert_relative_eq!(operator[(0, 1)], 0.048675, epsilon = 1e-6);
    let lattice = Lattice::new(4).unwrap();
    assert_relative_eq!(operator_entry(&lattice, 0, 1, &ExpKernel), operator[(0, 1)]);
  }

  #[test]
  fn entries_assemble_operator() {
    let (n, lambda) = (3, 2.0);
    let lattice = Lattice::new(n).unwrap();
    let operator = build_operator(n, &ExpKernel, lambda).unwrap();
    for i in 0..n * n {
      for j in 0..n * n {
        let identity = if i == j { 1.0 } else { 0.0 };
        let expected = identity + lambda * operator_entry(&lattice, i, j, &ExpKernel);
        assert_relative_eq!(operator[(i, j)], expected, max_relative = 1e-15);
      }
    }
  }

  #[test]
  fn operator_is_symmetric() {
    let operator = build_operator(6, &ExpKernel, 2.0).unwrap();
    assert_mat_eq(&operator, &operator.transpose());
  }

  #[test]
  fn kernel_is_swappable() {
    let gaussian = |d: f64| (-d * d).exp();
    let operator = build_operator(3, &gaussian, 1.0).unwrap();
    let expected = (-(1.0f64 / 3.0).powi(2)).exp() / 9.0;
    assert_relative_eq!(operator[(0, 1)], expected, max_relative = 1e-12);

    let operator = build_operator(3, &exp_kernel, 1.0).unwrap();
    assert_relative_eq!(operator[(0, 1)], (-1.0f64 / 3.0).exp() / 9.0, max_relative = 1e-12);
  }

  #[test]
  fn filter_is_first_column() {
    let n = 5;
    let operator = build_operator(n, &ExpKernel, 1.5).unwrap();
    let filter = operator_filter(n, &ExpKernel, 1.5).unwrap();
    assert_eq!(filter, operator.column(0).clone_owned());
  }

  #[test]
  fn zero_resolution_is_rejected() {
    assert!(matches!(
      build_operator(0, &ExpKernel, 1.0),
      Err(Error::InvalidResolution(0))
    ));
    assert!(operator_filter(0, &ExpKernel, 1.0).is_err());
  }
}
