//! Fredholm integral equations of the second kind on the periodic unit square.
//!
//! The equation $g = (I + lambda K) f$ is discretized on an $n times n$ toroidal
//! lattice, where $K$ is a radial kernel of the wrap-around Manhattan distance.
//! The resulting dense system is a group cross-correlation over $ZZ_n times ZZ_n$.

extern crate nalgebra as na;

pub mod convergence;
pub mod error;
pub mod forcing;
pub mod io;
pub mod kernel;
pub mod lattice;
pub mod linalg;
pub mod operator;
pub mod solve;
pub mod study;
pub mod symmetry;

pub use error::{Error, Result};

/// Linear index of a lattice point, in `0..n^2`.
pub type PointIdx = usize;
/// Number of lattice points per axis.
pub type Resolution = usize;
