//! Retention strategies for generation history.
//!
//! The population appends every generation to its history; the strategy
//! decides how much of that history survives. Full tracking is useful for
//! analysis and reproducibility, while a bounded window keeps memory flat
//! over a long-running optimization.

use crate::generation::Generation;
use crate::types::Chromosome;

/// Minimum number of generations every strategy must retain.
///
/// Elitism reads the previous generation when the current one ends, so the
/// two most recent generations are never eligible for pruning.
const MIN_RETAINED: usize = 2;

/// Policy governing how much generation history the population retains.
///
/// Invoked once per generation creation, after the new generation has been
/// appended to history. Strategies reshape the retained history only; they
/// never mutate chromosome contents.
///
/// # Examples
///
/// ```
/// use evo_population::GenerationStrategy;
///
/// // Keep every generation (the default).
/// let strategy = GenerationStrategy::Tracking;
///
/// // Keep only the 10 most recent generations.
/// let strategy = GenerationStrategy::BoundedHistory(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Retain every generation ever created.
    ///
    /// Memory grows without bound over a long run, in exchange for a
    /// complete evolutionary record.
    Tracking,

    /// Retain only the `n` most recent generations, discarding older ones.
    ///
    /// Trades history for a flat memory footprint. Values below 2 are
    /// treated as 2: the previous generation must survive for elitism.
    BoundedHistory(usize),
}

impl Default for GenerationStrategy {
    fn default() -> Self {
        GenerationStrategy::Tracking
    }
}

impl GenerationStrategy {
    /// Registers a newly created generation against the population history.
    ///
    /// Called by the population once per generation creation, immediately
    /// after the append. May drop older generations from the front of the
    /// history; the two most recent entries are always retained.
    pub(crate) fn register_new_generation<C: Chromosome>(
        &self,
        generations: &mut Vec<Generation<C>>,
    ) {
        match self {
            GenerationStrategy::Tracking => {}
            GenerationStrategy::BoundedHistory(n) => {
                let keep = (*n).max(MIN_RETAINED);
                if generations.len() > keep {
                    generations.drain(..generations.len() - keep);
                }
            }
        }
    }
}
