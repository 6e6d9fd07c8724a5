//! Uniform lattice on the unit torus $[0,1)^2$.
//!
//! Points are enumerated row-major: the linear index $i$ corresponds to the
//! cartesian index $(i div n, i mod n)$ and to the point $(i div n, i mod n) / n$.

use crate::{error::Result, Error, PointIdx, Resolution};

use num_integer::Integer;

/// converts linear index to cartesian index
///
/// converts linear index in 0..n^2 to cartesian index in (0,0)..(n,n)
pub fn linear_index2cartesian_index(lin_idx: PointIdx, n: Resolution) -> [usize; 2] {
  let (row, col) = lin_idx.div_rem(&n);
  [row, col]
}

/// converts cartesian index to linear index
///
/// converts cartesian index in (0,0)..(n,n) to linear index in 0..n^2
pub fn cartesian_index2linear_index(cart_idx: [usize; 2], n: Resolution) -> PointIdx {
  cart_idx[0] * n + cart_idx[1]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
  pub x: f64,
  pub y: f64,
}
impl LatticePoint {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
  pub fn coords(&self) -> [f64; 2] {
    [self.x, self.y]
  }
}

/// Point of the lattice with `n` points per axis at linear index `i`.
pub fn point_of_index(i: PointIdx, n: Resolution) -> LatticePoint {
  let [row, col] = linear_index2cartesian_index(i, n);
  let n = n as f64;
  LatticePoint::new(row as f64 / n, col as f64 / n)
}

/// Wrapped difference of two coordinates on the unit circle.
pub fn wrapped_difference(a: f64, b: f64) -> f64 {
  let diff = (a - b).abs();
  if diff < 0.5 {
    diff
  } else {
    1.0 - diff
  }
}

/// Manhattan distance on the unit torus, where the lattice wraps around at its boundary.
pub fn toroidal_distance(p: LatticePoint, q: LatticePoint) -> f64 {
  wrapped_difference(p.x, q.x) + wrapped_difference(p.y, q.y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
  n: Resolution,
}
impl Lattice {
  pub fn new(n: Resolution) -> Result<Self> {
    if n == 0 {
      return Err(Error::InvalidResolution(n));
    }
    Ok(Self { n })
  }

  pub fn resolution(&self) -> Resolution {
    self.n
  }
  pub fn npoints(&self) -> usize {
    self.n.pow(2)
  }
  /// Area of a single lattice cell, the quadrature weight of each point.
  pub fn cell_area(&self) -> f64 {
    (self.npoints() as f64).recip()
  }

  pub fn point(&self, i: PointIdx) -> LatticePoint {
    assert!(i < self.npoints(), "point index {i} out of range");
    point_of_index(i, self.n)
  }
  pub fn points(&self) -> impl ExactSizeIterator<Item = LatticePoint> + '_ {
    (0..self.npoints()).map(|i| point_of_index(i, self.n))
  }

  /// The one-dimensional grid $0, 1/n, ..., (n-1)/n$.
  pub fn coords(&self) -> Vec<f64> {
    (0..self.n).map(|k| k as f64 / self.n as f64).collect()
  }

  pub fn distance(&self, i: PointIdx, j: PointIdx) -> f64 {
    toroidal_distance(self.point(i), self.point(j))
  }
}
