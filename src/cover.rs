//! Set cover problem types and algorithms.
//!
//! The minimum set cover problem: given a universe of elements `0..N-1` and a
//! family of candidate subsets, select the fewest subsets whose union equals
//! the universe. Finding an optimal cover is NP-hard; this module implements
//! the classic greedy approximation ([`greedy::solve`]) together with an
//! independent correctness checker ([`verify::check`]).

use std::collections::HashSet;

use crate::error::{Error, Result};

pub mod greedy;
pub mod verify;

pub use greedy::solve as greedy_cover;
pub use verify::{check as verify_cover, VerifyReport};

/// An immutable set cover instance.
///
/// The universe is the dense element range `0..universe_size`. Each candidate
/// subset is identified by its position in `subsets`; positions are the
/// indices a solver returns. Subsets may overlap, repeat, or be empty; an
/// empty subset simply can never be chosen by the greedy solver.
#[derive(Debug, Clone)]
pub struct SetCoverInstance {
    universe_size: usize,
    subsets: Vec<HashSet<usize>>,
}

impl SetCoverInstance {
    /// Creates an instance, validating that `universe_size >= 1` and that every
    /// element id in every subset lies in `[0, universe_size)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInstance`] if the universe is empty or a subset
    /// references an out-of-range element.
    pub fn new(universe_size: usize, subsets: Vec<HashSet<usize>>) -> Result<Self> {
        if universe_size == 0 {
            return Err(Error::invalid_instance("universe size must be at least 1"));
        }
        for (idx, subset) in subsets.iter().enumerate() {
            if let Some(&bad) = subset.iter().find(|&&e| e >= universe_size) {
                return Err(Error::invalid_instance(format!(
                    "subset {} contains element {} outside universe 0..{}",
                    idx, bad, universe_size
                )));
            }
        }
        Ok(Self {
            universe_size,
            subsets,
        })
    }

    /// Number of elements in the universe.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// The candidate subsets, in index order.
    pub fn subsets(&self) -> &[HashSet<usize>] {
        &self.subsets
    }

    /// Size of the largest candidate subset (0 when there are none).
    pub fn max_subset_size(&self) -> usize {
        self.subsets.iter().map(HashSet::len).max().unwrap_or(0)
    }
}

/// The n-th harmonic number `H(n) = 1 + 1/2 + ... + 1/n` (`H(0) = 0`).
///
/// The greedy algorithm's cover is at most `H(max subset size)` times the
/// optimal cover size, so this bounds the worst-case approximation ratio.
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}
