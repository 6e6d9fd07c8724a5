//! Group structure of the discretized operator.
//!
//! The lattice is the group $ZZ_n times ZZ_n$ and the toroidal distance is
//! translation invariant, so $I + lambda K$ is a group cross-correlation:
//! a linear combination of the (inverse) regular representation matrices,
//! weighted by the first column of the operator. Hence it is diagonalized
//! by the two-dimensional discrete Fourier basis.
//!
//! This is a diagnostic only, the solver never relies on it.

use crate::{error::Result, kernel::Kernel, linalg::kronecker_product_all, operator, Error};

/// Regular representation of the cyclic group $ZZ_N$.
///
/// Element $k$ is the permutation matrix mapping $e_j -> e_((j+k) mod N)$.
/// The matrices are ordered by group element, starting with the identity.
pub fn cyclic_regular_reps(order: usize) -> Vec<na::DMatrix<f64>> {
  (0..order)
    .map(|k| {
      na::DMatrix::from_fn(order, order, |r, c| {
        if r == (c + k) % order {
          1.0
        } else {
          0.0
        }
      })
    })
    .collect()
}

/// Inverse regular representation of the direct product $ZZ_N times ZZ_N$.
///
/// Element $(a, b)$ sits at position $a N + b$, matching the lattice index convention.
pub fn cyclic_product_reps(order: usize) -> Vec<na::DMatrix<f64>> {
  let reps = cyclic_regular_reps(order);
  let mut product_reps = Vec::with_capacity(order.pow(2));
  for rep_a in &reps {
    for rep_b in &reps {
      let rep = kronecker_product_all(&[rep_a.clone(), rep_b.clone()]);
      product_reps.push(rep.transpose());
    }
  }
  product_reps
}

/// $sum_k "filter"_k R_k$
pub fn group_cross_correlation(
  filter: &na::DVector<f64>,
  reps: &[na::DMatrix<f64>],
) -> Result<na::DMatrix<f64>> {
  if filter.len() != reps.len() {
    return Err(Error::DimensionMismatch {
      expected: reps.len(),
      found: filter.len(),
    });
  }
  let Some(first) = reps.first() else {
    return Err(Error::EmptyInput);
  };

  let mut correlation = na::DMatrix::zeros(first.nrows(), first.ncols());
  for (&weight, rep) in filter.iter().zip(reps) {
    correlation += weight * rep;
  }
  Ok(correlation)
}

/// Deviation of the operator from the group cross-correlation of its first column.
///
/// Returns $norm(A - sum_k "filter"_k R_k)_F / n^4$, which vanishes up to rounding.
pub fn operator_structure_defect(n: usize, kernel: &impl Kernel, lambda: f64) -> Result<f64> {
  let assembled = operator::build_operator(n, kernel, lambda)?;
  let filter = operator::operator_filter(n, kernel, lambda)?;
  let correlation = group_cross_correlation(&filter, &cyclic_product_reps(n))?;
  Ok((assembled - correlation).norm() / (n as f64).powi(4))
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{kernel::ExpKernel, linalg::assert_mat_eq};

  #[test]
  fn regular_reps_form_group() {
    let order = 5;
    let reps = cyclic_regular_reps(order);
    assert_mat_eq(&reps[0], &na::DMatrix::identity(order, order));
    for a in 0..order {
      for b in 0..order {
        assert_mat_eq(&(&reps[a] * &reps[b]), &reps[(a + b) % order]);
      }
      assert_mat_eq(&(&reps[a] * reps[a].transpose()), &na::DMatrix::identity(order, order));
    }
  }

  #[test]
  fn product_reps_ordering() {
    let order = 3;
    let reps = cyclic_product_reps(order);
    assert_eq!(reps.len(), 9);
    for (k, rep) in reps.iter().enumerate() {
      // inverse rep maps e_k back to e_0
      assert_eq!(rep.transpose().column(0).imax(), k);
      assert_eq!(rep.column(k).imax(), 0);
    }
  }

  #[test]
  fn operator_is_group_cross_correlation() {
    for n in 1..=6 {
      let defect = operator_structure_defect(n, &ExpKernel, 1.0).unwrap();
      assert!(defect < 1e-14, "n={n} defect={defect}");
    }
  }

  #[test]
  fn correlation_preconditions() {
    let filter = na::DVector::zeros(3);
    assert!(group_cross_correlation(&filter, &cyclic_product_reps(2)).is_err());
    let empty = na::DVector::zeros(0);
    assert!(matches!(
      group_cross_correlation(&empty, &[]),
      Err(Error::EmptyInput)
    ));
  }
}
