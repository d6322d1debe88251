//! A single generation: one iteration's bounded snapshot of chromosomes.

use crate::types::Chromosome;
use std::sync::Arc;

/// An ordered, bounded snapshot of chromosomes produced at one iteration.
///
/// Generations are created exclusively by
/// [`Population::create_new_generation`](crate::Population::create_new_generation)
/// and remain mutable only during the window between creation and
/// finalization: the population appends elite clones and then calls
/// [`end`](Generation::end) exactly once, which orders the members
/// best-first, enforces the size ceiling, and fixes the generation's best
/// chromosome.
///
/// Members are shared via `Arc` so the driving loop can carry a chromosome
/// unchanged into a later generation, and so the population's best-known
/// chromosome stays alive even after a retention strategy prunes the
/// generation that produced it.
#[derive(Debug, Clone)]
pub struct Generation<C: Chromosome> {
    number: usize,
    chromosomes: Vec<Arc<C>>,
    best: Option<Arc<C>>,
}

impl<C: Chromosome> Generation<C> {
    /// Captures the 1-based ordinal and takes ownership of the members.
    pub(crate) fn new(number: usize, chromosomes: Vec<Arc<C>>) -> Self {
        Self {
            number,
            chromosomes,
            best: None,
        }
    }

    /// The 1-based sequence index assigned at creation time.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The members of this generation.
    ///
    /// Best-first only after the generation has been finalized.
    pub fn chromosomes(&self) -> &[Arc<C>] {
        &self.chromosomes
    }

    /// The highest-fitness member of this generation.
    ///
    /// `None` until the generation has been finalized.
    pub fn best_chromosome(&self) -> Option<&Arc<C>> {
        self.best.as_ref()
    }

    /// Appends an elite clone carried over from the previous generation.
    pub(crate) fn push(&mut self, chromosome: Arc<C>) {
        self.chromosomes.push(chromosome);
    }

    /// Finalizes the generation against the population's size ceiling.
    ///
    /// Orders members by descending fitness (stable, so equal-fitness
    /// members keep their insertion order), truncates the lowest-fitness
    /// tail beyond `max_size`, and records the front member as this
    /// generation's best. Called exactly once per generation.
    pub(crate) fn end(&mut self, max_size: usize) {
        self.chromosomes.sort_by(|a, b| {
            b.fitness()
                .partial_cmp(&a.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.chromosomes.truncate(max_size);
        self.best = self.chromosomes.first().cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Candidate {
        tag: char,
        fit: f64,
    }

    impl Chromosome for Candidate {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn create_new<R: rand::Rng>(&self, rng: &mut R) -> Self {
            Candidate {
                tag: '?',
                fit: rng.random_range(0.0..1.0),
            }
        }
    }

    fn members(pairs: &[(char, f64)]) -> Vec<Arc<Candidate>> {
        pairs
            .iter()
            .map(|&(tag, fit)| Arc::new(Candidate { tag, fit }))
            .collect()
    }

    fn tags(generation: &Generation<Candidate>) -> Vec<char> {
        generation.chromosomes().iter().map(|c| c.tag).collect()
    }

    #[test]
    fn test_best_is_none_before_end() {
        let generation = Generation::new(1, members(&[('a', 1.0), ('b', 2.0)]));
        assert!(generation.best_chromosome().is_none());
        assert_eq!(generation.number(), 1);
        assert_eq!(generation.chromosomes().len(), 2);
    }

    #[test]
    fn test_end_orders_descending() {
        let mut generation =
            Generation::new(1, members(&[('a', 1.0), ('b', 4.0), ('c', 2.0), ('d', 3.0)]));
        generation.end(6);

        assert_eq!(tags(&generation), vec!['b', 'd', 'c', 'a']);
        assert_eq!(generation.best_chromosome().unwrap().tag, 'b');
    }

    #[test]
    fn test_end_truncates_lowest_tail() {
        let mut generation = Generation::new(
            2,
            members(&[('a', 5.0), ('b', 1.0), ('c', 3.0), ('d', 2.0), ('e', 4.0)]),
        );
        generation.end(3);

        assert_eq!(tags(&generation), vec!['a', 'e', 'c']);
    }

    #[test]
    fn test_end_tie_break_is_first_seen_wins() {
        let mut generation = Generation::new(
            1,
            members(&[('a', 2.0), ('b', 5.0), ('c', 5.0), ('d', 2.0)]),
        );
        generation.end(10);

        // Equal fitness keeps insertion order.
        assert_eq!(tags(&generation), vec!['b', 'c', 'a', 'd']);
        assert_eq!(generation.best_chromosome().unwrap().tag, 'b');
    }

    #[test]
    fn test_push_extends_members_before_end() {
        let mut generation = Generation::new(1, members(&[('a', 1.0)]));
        generation.push(Arc::new(Candidate { tag: 'z', fit: 9.0 }));
        generation.end(6);

        assert_eq!(tags(&generation), vec!['z', 'a']);
    }
}
