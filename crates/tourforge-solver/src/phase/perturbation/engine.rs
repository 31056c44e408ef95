//! Random transposition perturbation with restart escalation.

use rand::Rng;
use tourforge_config::{PerturbationConfig, DEFAULT_MAX_DRAWS, DEFAULT_RESTART_SWAPS};
use tourforge_core::{DistanceOracle, Result, Tour};
use tracing::{debug, trace};

use super::TriedTranspositions;
use crate::heuristic::r#move::{PositionPair, TranspositionMove};
use crate::phase::construction::NearestNeighborBuilder;

/// What a perturbation did to produce its tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbationKind {
    /// The best tour with the cities at two positions exchanged.
    Transposition(PositionPair),
    /// A freshly built and scrambled tour; the tried set was cleared.
    Restart,
}

/// A new working tour produced by [`PerturbationEngine::perturb`].
#[derive(Debug, Clone, PartialEq)]
pub struct Perturbation {
    pub tour: Tour,
    pub kind: PerturbationKind,
}

impl Perturbation {
    pub fn restarted(&self) -> bool {
        self.kind == PerturbationKind::Restart
    }

    /// The transposition applied, unless this was a restart.
    pub fn pair(&self) -> Option<PositionPair> {
        match self.kind {
            PerturbationKind::Transposition(pair) => Some(pair),
            PerturbationKind::Restart => None,
        }
    }
}

/// Escapes 2-opt local optima.
///
/// Copies the best tour and exchanges two random interior positions that
/// have not been tried since the last restart. When `max_draws` draws fail
/// to find a fresh pair the neighborhood is considered exhausted: the tried
/// set is cleared and a new nearest-neighbor tour is scrambled with
/// `restart_swaps` unconditional random swaps.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tourforge_core::{EuclideanInstance, Tour};
/// use tourforge_solver::phase::perturbation::{PerturbationEngine, TriedTranspositions};
///
/// let instance = EuclideanInstance::from_coordinates(
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.5, 2.0)],
/// ).unwrap();
/// let best = Tour::identity(5).unwrap();
/// let mut tried = TriedTranspositions::new();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let engine = PerturbationEngine::default();
/// let perturbation = engine.perturb(&best, &mut tried, &instance, &mut rng).unwrap();
///
/// assert!(!perturbation.restarted());
/// assert_eq!(tried.len(), 1);
/// assert!(perturbation.tour.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct PerturbationEngine {
    max_draws: usize,
    restart_swaps: usize,
    builder: NearestNeighborBuilder,
}

impl Default for PerturbationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DRAWS, DEFAULT_RESTART_SWAPS)
    }
}

impl PerturbationEngine {
    pub fn new(max_draws: usize, restart_swaps: usize) -> Self {
        Self {
            max_draws,
            restart_swaps,
            builder: NearestNeighborBuilder::new(),
        }
    }

    pub fn from_config(config: &PerturbationConfig) -> Self {
        Self::new(config.max_draws, config.restart_swaps)
    }

    pub fn max_draws(&self) -> usize {
        self.max_draws
    }

    pub fn restart_swaps(&self) -> usize {
        self.restart_swaps
    }

    /// Produces the next working tour from `best`.
    ///
    /// On success the applied pair is added to `tried`; on restart `tried`
    /// is cleared. `best` itself is never modified.
    pub fn perturb<O, R>(
        &self,
        best: &Tour,
        tried: &mut TriedTranspositions,
        oracle: &O,
        rng: &mut R,
    ) -> Result<Perturbation>
    where
        O: DistanceOracle + ?Sized,
        R: Rng,
    {
        let n = best.city_count();

        // Fewer than two interior positions: no pair can ever be fresh.
        if n >= 3 {
            for draw in 0..self.max_draws {
                let pair = PositionPair::new(rng.random_range(1..n), rng.random_range(1..n));
                if pair.is_degenerate() || tried.contains(pair) {
                    continue;
                }

                let mut tour = best.clone();
                TranspositionMove::from(pair).apply(&mut tour)?;
                tried.insert(pair);
                trace!(event = "perturb", pair = %pair, draws = draw + 1);
                return Ok(Perturbation {
                    tour,
                    kind: PerturbationKind::Transposition(pair),
                });
            }
        }

        debug!(
            event = "restart",
            tried = tried.len(),
            draws = self.max_draws,
        );
        tried.clear();
        let tour = self
            .builder
            .build_scrambled(oracle, rng, self.restart_swaps)?;
        Ok(Perturbation {
            tour,
            kind: PerturbationKind::Restart,
        })
    }
}
