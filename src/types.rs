//! Core trait definitions for the population core.
//!
//! The two central traits, [`Chromosome`] and [`Fitness`], define the
//! contract between the generic generation-lifecycle engine and
//! domain-specific solution representations.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `f64` and `f32`.
/// For minimization problems, negate the fitness or use a wrapper type.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for initial/unevaluated chromosomes.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution managed by the population core.
///
/// The core never evaluates, recombines, or mutates chromosomes; those
/// operations belong to the driving evolutionary loop. It consumes exactly
/// three capabilities:
///
/// 1. A comparable fitness value, used to order finalized generations
///    best-first ([`fitness`](Chromosome::fitness)).
/// 2. Spawning a fresh, unrelated instance of the same kind, used only to
///    seed the initial generation from the prototype
///    ([`create_new`](Chromosome::create_new)).
/// 3. Producing an identical copy, used when elites are carried into the
///    next generation as independent individuals (`Clone`).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     fitness: f64,
/// }
///
/// impl Chromosome for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.fitness }
///     fn create_new<R: Rng>(&self, rng: &mut R) -> Self {
///         MySolution {
///             genes: (0..self.genes.len()).map(|_| rng.random_range(-1.0..1.0)).collect(),
///             fitness: f64::NEG_INFINITY,
///         }
///     }
/// }
/// ```
pub trait Chromosome: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this chromosome.
    ///
    /// The driving loop is responsible for having evaluated the chromosome
    /// before it enters a generation; unevaluated chromosomes should report
    /// [`Fitness::worst`].
    fn fitness(&self) -> Self::Fitness;

    /// Creates a fresh instance of the same kind of chromosome.
    ///
    /// Called once per initial member when the population seeds generation
    /// #1 from its prototype. The result must be a new, independent
    /// individual, not a copy of `self`'s encoded state.
    fn create_new<R: Rng>(&self, rng: &mut R) -> Self;
}
