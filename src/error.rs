use crate::Resolution;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("argument {x} lies outside of the domain [0, 1]")]
  Domain { x: f64 },
  #[error("invalid lattice resolution n={0}, must be at least 1")]
  InvalidResolution(Resolution),
  #[error("dimension mismatch: expected {expected}, found {found}")]
  DimensionMismatch { expected: usize, found: usize },
  #[error("empty input")]
  EmptyInput,
  #[error("power law fit is degenerate: {0}")]
  DegenerateFit(&'static str),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
