//! Plain-text export of study results for external plotting.

use crate::{
  error::Result,
  study::{ErrorStudy, ResolutionResult},
};

use std::{
  fs::File,
  io::{BufWriter, Write},
  path::Path,
};

pub fn save_error_study(study: &ErrorStudy, path: impl AsRef<Path>) -> Result<()> {
  let file = File::create(path)?;
  let writer = BufWriter::new(file);
  write_error_study(writer, study)
}

/// Columns `n error fit`, the fitted power law as a header comment.
pub fn write_error_study<W: Write>(mut writer: W, study: &ErrorStudy) -> Result<()> {
  let fit = study.fit;
  writeln!(writer, "# slope {:.6} intercept {:.6}", fit.slope, fit.intercept)?;
  writeln!(writer, "# n error fit")?;
  for &(n, error) in study.series.entries() {
    writeln!(writer, "{n} {error:.6e} {:.6e}", fit.eval(n as f64))?;
  }
  writer.flush()?;
  Ok(())
}

pub fn save_solution_samples(result: &ResolutionResult, path: impl AsRef<Path>) -> Result<()> {
  let file = File::create(path)?;
  let writer = BufWriter::new(file);
  write_solution_samples(writer, result)
}

/// Columns `x y approx exact`, one row per lattice point.
pub fn write_solution_samples<W: Write>(
  mut writer: W,
  result: &ResolutionResult,
) -> Result<()> {
  writeln!(writer, "# n {}", result.n)?;
  writeln!(writer, "# x y approx exact")?;
  for (point, approx, exact) in result.samples() {
    writeln!(writer, "{:.6} {:.6} {approx:.6e} {exact:.6e}", point.x, point.y)?;
  }
  writer.flush()?;
  Ok(())
}

#[cfg(test)]
mod test {
  use super::{save_solution_samples, write_error_study, write_solution_samples};
  use crate::{
    convergence::ErrorSeries,
    kernel::ExpKernel,
    study::{solve_resolution, ErrorStudy},
    Error,
  };

  #[test]
  fn error_study_table() {
    let mut series = ErrorSeries::new();
    series.push(4, 1e-2);
    series.push(8, 2.5e-3);
    let fit = series.fit().unwrap();
    let study = ErrorStudy {
      results: Vec::new(),
      series,
      fit,
    };

    let mut buffer = Vec::new();
    write_error_study(&mut buffer, &study).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("# slope -2.000000"));
    assert!(lines[2].starts_with("4 1.000000e-2"));
    assert!(lines[3].starts_with("8 2.500000e-3"));
  }

  #[test]
  fn solution_samples_table() {
    let result = solve_resolution(2, &ExpKernel, 1.0).unwrap();
    let mut buffer = Vec::new();
    write_solution_samples(&mut buffer, &result).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let rows: Vec<_> = text.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("0.000000 0.500000 "));
    assert_eq!(rows[3].split_whitespace().count(), 4);
  }

  #[test]
  fn missing_directory_is_io_error() {
    let result = solve_resolution(2, &ExpKernel, 1.0).unwrap();
    let path = std::env::temp_dir()
      .join("fredholm-missing-directory")
      .join("solution.dat");
    assert!(matches!(
      save_solution_samples(&result, path),
      Err(Error::Io(_))
    ));
  }
}
