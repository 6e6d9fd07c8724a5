//! Dense linear algebra helpers on top of nalgebra, and conversions to faer.

pub trait DMatrixExt {
  fn is_symmetric(&self, eps: f64) -> bool;
  fn eigen_condition_number(&self) -> f64;
}
impl DMatrixExt for na::DMatrix<f64> {
  fn is_symmetric(&self, eps: f64) -> bool {
    self.is_square() && (self - self.transpose()).amax() <= eps
  }

  /// Ratio between the largest and smallest eigenvalue magnitude.
  fn eigen_condition_number(&self) -> f64 {
    crate::solve::spectral_radius_ratio(self)
  }
}

/// Kronecker product of all matrices, from left to right.
pub fn kronecker_product_all<T>(mats: &[na::DMatrix<T>]) -> na::DMatrix<T>
where
  T: na::Scalar + num_traits::Zero + num_traits::One + na::ClosedAddAssign + na::ClosedMulAssign,
{
  mats
    .iter()
    .fold(na::DMatrix::identity(1, 1), |prod, mat| prod.kronecker(mat))
}

pub fn namat2faermat(na: &na::DMatrix<f64>) -> faer::Mat<f64> {
  faer::Mat::from_fn(na.nrows(), na.ncols(), |i, j| na[(i, j)])
}

pub fn faercol2navec(faer: faer::ColRef<'_, f64>) -> na::DVector<f64> {
  na::DVector::from_fn(faer.nrows(), |i, _| faer.read(i))
}

pub fn assert_mat_eq(a: &na::DMatrix<f64>, b: &na::DMatrix<f64>) {
  const TOL: f64 = 10e-12;
  let diff = a - b;
  let error = diff.norm();
  let equal = error <= TOL;
  if !equal {
    println!("Matrix a={a:.3}");
    println!("Matrix b={b:.3}");
    println!("a-b={diff:.3}");
    panic!("Matrices not equal.");
  }
}
