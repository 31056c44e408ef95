//! Zero-wiring entry points.

use std::path::Path;

use tokio::sync::mpsc;
use tourforge_config::{ConfigError, SolverConfig};
use tourforge_core::{DistanceOracle, Result, SolutionSink};
use tourforge_solver::{ChannelSink, SolveResult, Solver, TourUpdate};
use tracing::warn;

/// Configuration file read by [`run_solver`].
pub const CONFIG_FILE: &str = "solver.toml";

/// Loads solver configuration, falling back to defaults.
///
/// A missing file is not an error. A file that exists but cannot be parsed
/// or validated is reported with a warning and ignored.
pub fn load_config(path: impl AsRef<Path>) -> SolverConfig {
    let path = path.as_ref();
    match SolverConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => SolverConfig::default(),
        Err(e) => {
            warn!(
                event = "config_ignored",
                path = %path.display(),
                error = %e,
            );
            SolverConfig::default()
        }
    }
}

/// Solves with the settings in `solver.toml`, or the defaults (30 seconds)
/// when there is none.
pub fn run_solver<O, K>(oracle: &O, sink: &mut K) -> Result<SolveResult>
where
    O: DistanceOracle + ?Sized,
    K: SolutionSink + ?Sized,
{
    let config = load_config(CONFIG_FILE);
    run_solver_with_config(oracle, sink, &config)
}

/// Solves with explicit settings.
pub fn run_solver_with_config<O, K>(
    oracle: &O,
    sink: &mut K,
    config: &SolverConfig,
) -> Result<SolveResult>
where
    O: DistanceOracle + ?Sized,
    K: SolutionSink + ?Sized,
{
    #[cfg(feature = "console")]
    tourforge_console::init();

    Solver::new(config)?.solve(oracle, sink)
}

/// Solves with explicit settings, streaming every improving tour through
/// `sender`.
pub fn run_solver_with_channel<O>(
    oracle: &O,
    config: &SolverConfig,
    sender: mpsc::UnboundedSender<TourUpdate>,
) -> Result<SolveResult>
where
    O: DistanceOracle + ?Sized,
{
    let mut sink = ChannelSink::new(sender);
    run_solver_with_config(oracle, &mut sink, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tourforge_core::TourSolution;
    use tourforge_test::instances::random_euclidean;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tourforge-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let config = load_config("/nonexistent/tourforge/solver.toml");
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let path = temp_file(
            "valid.toml",
            "random_seed = 5\n\n[termination]\nseconds_spent_limit = 2\n",
        );
        let config = load_config(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.random_seed, Some(5));
        assert_eq!(config.time_limit(), Some(std::time::Duration::from_secs(2)));
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        let path = temp_file("invalid.toml", "[perturbation]\nmax_draws = 0\n");
        let config = load_config(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_run_solver_with_config() {
        let instance = random_euclidean(20, 4);
        let mut solution = TourSolution::new(20);
        let config = SolverConfig::new()
            .with_termination_seconds(0.6)
            .with_random_seed(4);

        let result = run_solver_with_config(&instance, &mut solution, &config).unwrap();

        assert_eq!(solution.distance(), Some(result.distance));
        assert_eq!(solution.order().as_deref(), Some(result.tour.order()));
    }

    #[test]
    fn test_run_solver_with_channel() {
        let instance = random_euclidean(20, 9);
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let config = SolverConfig::new()
            .with_termination_seconds(0.6)
            .with_random_seed(9);

        let result = run_solver_with_channel(&instance, &config, sender).unwrap();

        let mut last = None;
        while let Ok(update) = receiver.try_recv() {
            last = Some(update);
        }
        assert_eq!(last, Some((result.tour.order().to_vec(), result.distance)));
    }
}
