//! Generation lifecycle core for evolutionary optimization engines.
//!
//! This crate manages the evolving set of candidate solutions inside an
//! evolutionary engine: it owns the sequence of generations, enforces
//! population size bounds, applies elitism between generations, tracks the
//! best solution found so far, and notifies observers when that best
//! changes. Everything else a complete engine needs (fitness evaluation,
//! crossover and mutation operators, parent selection, and the termination
//! loop) lives outside this crate, behind narrow trait boundaries.
//!
//! # Core Traits
//!
//! - [`Chromosome`]: A candidate solution that can report its fitness,
//!   spawn a fresh instance of its kind, and copy itself (`Clone`)
//! - [`Fitness`]: A comparable quality measure, higher is better
//!
//! # Key Types
//!
//! - [`Population`]: Owns the generation sequence, size bounds, elite
//!   count, and the historically-best chromosome
//! - [`Generation`]: One iteration's ordered, bounded snapshot of members
//! - [`GenerationStrategy`]: History retention policy, full tracking or a
//!   bounded window
//! - [`PopulationError`]: Validation errors for construction and
//!   generation creation
//!
//! # Lifecycle
//!
//! The driving loop serializes the generation lifecycle on a single
//! thread: construct, create the initial generation, then repeatedly
//! produce offspring externally, commit them with
//! [`Population::create_new_generation`], and finalize with
//! [`Population::end_current_generation`]. Best-changed notifications are
//! delivered in-line, on the same call stack, at most once per
//! finalization.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), elitist selection in genetic adaptive systems
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod error;
mod generation;
mod population;
mod strategy;
mod types;

pub use error::PopulationError;
pub use generation::Generation;
pub use population::Population;
pub use strategy::GenerationStrategy;
pub use types::{Chromosome, Fitness};
