use std::collections::BTreeSet;

use bitvec::prelude::*;

use crate::cover::SetCoverInstance;
use crate::error::{Error, Result};

/// Outcome of checking a proposed cover against an instance.
///
/// An invalid cover is a reportable outcome, not an error: the checker is
/// meant to run on arbitrary covers, including deliberately wrong ones.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    /// Whether every universe element is covered by at least one chosen subset.
    pub valid: bool,
    /// Number of distinct universe elements covered.
    pub covered_count: usize,
    /// Elements left uncovered, in ascending order. Empty for a valid cover.
    pub missing_elements: BTreeSet<usize>,
    /// `|cover| / optimum` when a reference optimum was supplied.
    pub ratio: Option<f64>,
}

/// Checks that `cover` (a sequence of subset indices) covers the instance's
/// universe, independently of how the cover was produced.
///
/// # Arguments
///
/// * `instance` - The set cover instance
/// * `cover` - Proposed cover, as subset indices into `instance.subsets()`
/// * `known_optimum` - Optional reference optimal cover size, used only to
///   report the approximation ratio
///
/// # Errors
///
/// Returns [`Error::InvalidInstance`] if the cover references a subset index
/// that does not exist.
pub fn check(
    instance: &SetCoverInstance,
    cover: &[usize],
    known_optimum: Option<usize>,
) -> Result<VerifyReport> {
    let subsets = instance.subsets();
    let mut covered: BitVec = bitvec![0; instance.universe_size()];

    for &idx in cover {
        let subset = subsets.get(idx).ok_or_else(|| {
            Error::invalid_instance(format!(
                "cover references subset {} but the instance has only {}",
                idx,
                subsets.len()
            ))
        })?;
        for &e in subset {
            covered.set(e, true);
        }
    }

    let covered_count = covered.count_ones();
    let missing_elements: BTreeSet<usize> = covered.iter_zeros().collect();
    let ratio = known_optimum
        .filter(|&opt| opt > 0)
        .map(|opt| cover.len() as f64 / opt as f64);

    Ok(VerifyReport {
        valid: missing_elements.is_empty(),
        covered_count,
        missing_elements,
        ratio,
    })
}
