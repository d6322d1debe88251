//! Population orchestration: generation lifecycle, elitism, best tracking.

use crate::error::PopulationError;
use crate::generation::Generation;
use crate::strategy::GenerationStrategy;
use crate::types::Chromosome;
use rand::Rng;
use std::sync::Arc;

/// Number of top performers carried into the next generation by default.
const DEFAULT_ELITE_COUNT: usize = 2;

/// Callback invoked when the population's best-known chromosome changes.
type BestChangedObserver<C> = Box<dyn FnMut(&Arc<C>) + Send>;

/// The top-level container for an evolutionary run.
///
/// Owns the generation sequence, the population size bounds, the elite
/// count, and the historically-best chromosome. The driving loop performs
/// selection, crossover, and mutation externally and feeds the results back
/// through the generation lifecycle:
///
/// 1. [`create_initial_generation`](Population::create_initial_generation)
///    seeds generation #1 from the prototype chromosome.
/// 2. [`create_new_generation`](Population::create_new_generation) commits a
///    freshly produced chromosome set as the next generation.
/// 3. [`end_current_generation`](Population::end_current_generation) injects
///    elite clones from the previous generation, finalizes the current one
///    against the size ceiling, and updates the best-known chromosome.
///
/// All operations run synchronously on the caller's thread; the owning loop
/// is responsible for serializing the lifecycle.
///
/// # Usage
///
/// ```
/// use evo_population::{Chromosome, Population};
/// use rand::rngs::StdRng;
/// use rand::{Rng, SeedableRng};
///
/// #[derive(Clone)]
/// struct Candidate {
///     fitness: f64,
/// }
///
/// impl Chromosome for Candidate {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 {
///         self.fitness
///     }
///     fn create_new<R: Rng>(&self, rng: &mut R) -> Self {
///         Candidate {
///             fitness: rng.random_range(0.0..1.0),
///         }
///     }
/// }
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut population = Population::new(4, 6, Candidate { fitness: 0.0 })?;
/// population.create_initial_generation(&mut rng);
/// population.end_current_generation();
/// assert!(population.best_chromosome().is_some());
/// # Ok::<(), evo_population::PopulationError>(())
/// ```
pub struct Population<C: Chromosome> {
    min_size: usize,
    max_size: usize,
    elite_count: usize,
    adam: C,
    generations: Vec<Generation<C>>,
    generations_number: usize,
    best: Option<Arc<C>>,
    strategy: GenerationStrategy,
    observers: Vec<BestChangedObserver<C>>,
}

impl<C: Chromosome> std::fmt::Debug for Population<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Population")
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("elite_count", &self.elite_count)
            .field("generations_number", &self.generations_number)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl<C: Chromosome> Population<C> {
    /// Creates a population with the given size bounds and prototype.
    ///
    /// `adam` is used exclusively to spawn the initial generation's members
    /// via [`Chromosome::create_new`]; it never enters the population
    /// itself.
    ///
    /// # Errors
    ///
    /// [`PopulationError::MinSizeTooSmall`] if `min_size < 2`;
    /// [`PopulationError::MaxSizeBelowMin`] if `max_size < min_size`.
    pub fn new(min_size: usize, max_size: usize, adam: C) -> Result<Self, PopulationError> {
        if min_size < 2 {
            return Err(PopulationError::MinSizeTooSmall(min_size));
        }
        if max_size < min_size {
            return Err(PopulationError::MaxSizeBelowMin {
                min: min_size,
                max: max_size,
            });
        }

        Ok(Self {
            min_size,
            max_size,
            elite_count: DEFAULT_ELITE_COUNT,
            adam,
            generations: Vec::new(),
            generations_number: 0,
            best: None,
            strategy: GenerationStrategy::default(),
            observers: Vec::new(),
        })
    }

    /// Seeds generation #1 with `min_size` fresh chromosomes.
    ///
    /// Each member comes from an independent [`Chromosome::create_new`] call
    /// on the prototype: a new individual of the same kind, not a copy of
    /// the prototype's state.
    pub fn create_initial_generation<R: Rng>(&mut self, rng: &mut R) {
        let chromosomes: Vec<Arc<C>> = (0..self.min_size)
            .map(|_| Arc::new(self.adam.create_new(rng)))
            .collect();
        self.commit_generation(chromosomes);
    }

    /// Commits a freshly produced chromosome set as the next generation.
    ///
    /// The previous current generation becomes the previous generation, the
    /// generation counter is incremented, the new generation is appended to
    /// history, and the retention strategy runs. Elitism and the size
    /// ceiling are NOT applied here; they happen only at
    /// [`end_current_generation`](Population::end_current_generation).
    ///
    /// # Errors
    ///
    /// [`PopulationError::EmptyGeneration`] if `chromosomes` is empty; the
    /// call then leaves the population untouched.
    pub fn create_new_generation(
        &mut self,
        chromosomes: Vec<Arc<C>>,
    ) -> Result<(), PopulationError> {
        if chromosomes.is_empty() {
            return Err(PopulationError::EmptyGeneration);
        }
        self.commit_generation(chromosomes);
        Ok(())
    }

    fn commit_generation(&mut self, chromosomes: Vec<Arc<C>>) {
        self.generations_number += 1;
        self.generations
            .push(Generation::new(self.generations_number, chromosomes));
        self.strategy.register_new_generation(&mut self.generations);
    }

    /// Ends the current generation and returns whether the best changed.
    ///
    /// The generation-transition algorithm:
    ///
    /// 1. If a previous generation exists, its first
    ///    [`elite_count`](Population::elite_count) chromosomes (it is
    ///    already ordered best-first by its own finalization) are cloned
    ///    into the current generation. The clones are independent
    ///    individuals, decoupled from any future mutation of the originals.
    ///    Skipped entirely on the first ever call.
    /// 2. The current generation is finalized: ordered by descending
    ///    fitness, truncated to `max_size`, its best member fixed.
    /// 3. The generation's best is compared with the population's recorded
    ///    best by identity (`Arc::ptr_eq`). If different, the recorded best
    ///    is updated and every registered observer is invoked synchronously
    ///    before this method returns. If identical, nothing fires: a
    ///    re-selected optimum does not notify redundantly.
    ///
    /// # Panics
    ///
    /// Panics if no generation has been created yet.
    pub fn end_current_generation(&mut self) -> bool {
        assert!(
            !self.generations.is_empty(),
            "no current generation to end"
        );

        if self.generations.len() >= 2 {
            let previous = &self.generations[self.generations.len() - 2];
            let elites: Vec<Arc<C>> = previous
                .chromosomes()
                .iter()
                .take(self.elite_count)
                .map(|chromosome| Arc::new(chromosome.as_ref().clone()))
                .collect();
            let current = self.generations.last_mut().expect("history is non-empty");
            for elite in elites {
                current.push(elite);
            }
        }

        let max_size = self.max_size;
        let current = self.generations.last_mut().expect("history is non-empty");
        current.end(max_size);
        let generation_best = current
            .best_chromosome()
            .cloned()
            .expect("a finalized generation has at least one member");

        let changed = self
            .best
            .as_ref()
            .map_or(true, |best| !Arc::ptr_eq(best, &generation_best));
        if changed {
            self.best = Some(generation_best.clone());
            for observer in &mut self.observers {
                observer(&generation_best);
            }
        }
        changed
    }

    /// Registers an observer invoked whenever the best chromosome changes.
    ///
    /// Observers run synchronously inside
    /// [`end_current_generation`](Population::end_current_generation), on
    /// the caller's thread, at most once per call.
    pub fn on_best_changed<F>(&mut self, observer: F)
    where
        F: FnMut(&Arc<C>) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// The minimum population size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// The maximum population size enforced at generation finalization.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of top performers carried into the next generation.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Sets the number of elites carried between generations.
    pub fn set_elite_count(&mut self, elite_count: usize) {
        self.elite_count = elite_count;
    }

    /// The retained generation history, oldest first.
    pub fn generations(&self) -> &[Generation<C>] {
        &self.generations
    }

    /// The most recently created generation.
    pub fn current_generation(&self) -> Option<&Generation<C>> {
        self.generations.last()
    }

    /// The generation before the current one.
    ///
    /// `None` until a second generation has been created.
    pub fn previous_generation(&self) -> Option<&Generation<C>> {
        self.generations
            .len()
            .checked_sub(2)
            .map(|index| &self.generations[index])
    }

    /// Total number of generations created so far.
    ///
    /// Monotonically increasing, independent of how much history the
    /// retention strategy keeps.
    pub fn generations_number(&self) -> usize {
        self.generations_number
    }

    /// The best chromosome across all finalized generations observed so far.
    ///
    /// A shared reference into the generation that produced it; stays alive
    /// even after that generation is pruned from history. `None` before the
    /// first [`end_current_generation`](Population::end_current_generation).
    pub fn best_chromosome(&self) -> Option<&Arc<C>> {
        self.best.as_ref()
    }

    /// The active history retention strategy.
    pub fn generation_strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    /// Replaces the history retention strategy.
    ///
    /// Takes effect at the next generation creation.
    pub fn set_generation_strategy(&mut self, strategy: GenerationStrategy) {
        self.strategy = strategy;
    }
}
