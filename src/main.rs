use fredholm::{
  io,
  kernel::ExpKernel,
  study::{run_error_study, StudyConfig},
};

use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let config = StudyConfig::error_study();
  let path = &config.output_dir;
  fs::create_dir_all(path)?;

  let study = run_error_study(&config, &ExpKernel)?;

  println!(
    "| {:>3} | {:>10} | {:>10} | {:>10} | {:>5} |",
    "n", "cond", "min |eig|", "error", "rate"
  );
  let rates = study.series.rates();
  for (k, result) in study.results.iter().enumerate() {
    let rate = k
      .checked_sub(1)
      .map(|prev| rates[prev])
      .unwrap_or(f64::INFINITY);
    println!(
      "| {:>3} | {:>10.4} | {:>10.4} | {:>10.3e} | {:>5.2} |",
      result.n,
      result.diagnostics.condition_number,
      result.diagnostics.min_eigenvalue_magnitude,
      result.error,
      rate
    );
  }
  println!(
    "error ~ 10^({:.2}) n^({:.2})",
    study.fit.intercept, study.fit.slope
  );

  io::save_error_study(&study, path.join("error.dat"))?;

  // Lattice samples for the surface comparison plot.
  for n in StudyConfig::solution_study().resolutions {
    if let Some(result) = study.result(n) {
      io::save_solution_samples(result, path.join(format!("solution_n{n}.dat")))?;
    }
  }
  tracing::info!("wrote plot data to {}", path.display());

  Ok(())
}
