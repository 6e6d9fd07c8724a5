/// A radial kernel, a scalar function of the (toroidal) distance between two points.
pub trait Kernel {
  fn eval(&self, distance: f64) -> f64;
}

impl<F> Kernel for F
where
  F: Fn(f64) -> f64,
{
  fn eval(&self, distance: f64) -> f64 {
    self(distance)
  }
}

/// Exponentially decaying kernel $K(d) = e^(-d)$.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpKernel;
impl Kernel for ExpKernel {
  fn eval(&self, distance: f64) -> f64 {
    exp_kernel(distance)
  }
}

pub fn exp_kernel(distance: f64) -> f64 {
  (-distance).exp()
}
