use bitvec::prelude::*;
use log::debug;

use crate::cover::SetCoverInstance;
use crate::error::{Error, Result};

/// Computes an approximate minimum set cover with the greedy algorithm.
///
/// Each step selects the subset covering the most still-uncovered elements
/// (its marginal gain), breaking ties toward the lowest subset index, until
/// the universe is covered. The produced cover is at most `H(max subset
/// size)` times the optimal size, where `H` is the harmonic number: the
/// classical bound for greedy set cover.
///
/// The tie-break is an explicit forward scan keeping the first maximum, so
/// the output is deterministic and never depends on container iteration
/// order.
///
/// # Arguments
///
/// * `instance` - The validated set cover instance
///
/// # Returns
///
/// * `Ok(indices)` - The selected subset indices, in selection order
/// * `Err(Error::Unsolvable)` - If no remaining subset covers any uncovered
///   element while some remain
pub fn solve(instance: &SetCoverInstance) -> Result<Vec<usize>> {
    let subsets = instance.subsets();
    let mut uncovered: BitVec = bitvec![1; instance.universe_size()];
    let mut remaining = instance.universe_size();
    let mut selected = Vec::new();
    let mut chosen: BitVec = bitvec![0; subsets.len()];

    while remaining > 0 {
        let mut best_idx = None;
        let mut best_gain = 0;

        // Forward scan keeping the first maximum: lowest index wins ties.
        for (idx, subset) in subsets.iter().enumerate() {
            if chosen[idx] {
                continue;
            }
            let gain = subset.iter().filter(|&&e| uncovered[e]).count();
            if gain > best_gain {
                best_gain = gain;
                best_idx = Some(idx);
            }
        }

        let Some(idx) = best_idx else {
            return Err(Error::unsolvable(format!(
                "no subset covers any of the {} remaining elements",
                remaining
            )));
        };

        for &e in &subsets[idx] {
            if uncovered[e] {
                uncovered.set(e, false);
                remaining -= 1;
            }
        }
        chosen.set(idx, true);
        selected.push(idx);
        debug!(
            "selected subset {} (gain {}), {} elements uncovered",
            idx, best_gain, remaining
        );
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::{harmonic, verify};
    use std::collections::HashSet;

    fn instance(universe_size: usize, raw: &[&[usize]]) -> SetCoverInstance {
        let subsets: Vec<HashSet<usize>> =
            raw.iter().map(|s| s.iter().copied().collect()).collect();
        SetCoverInstance::new(universe_size, subsets).unwrap()
    }

    #[test]
    fn test_single_subset_covers_universe() {
        let instance = instance(4, &[&[0, 1, 2, 3]]);
        assert_eq!(solve(&instance).unwrap(), vec![0]);
    }

    #[test]
    fn test_minimal_example_trace() {
        // Step 1 picks subset 0 (gain 3), step 2 ties subsets 1 and 2 at
        // gain 1 and must break toward index 1, step 3 picks subset 2.
        let instance = instance(5, &[&[0, 1, 2], &[2, 3], &[3, 4]]);
        assert_eq!(solve(&instance).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Identical subsets: only the first may ever be chosen.
        let instance = instance(2, &[&[0, 1], &[0, 1], &[0, 1]]);
        assert_eq!(solve(&instance).unwrap(), vec![0]);
    }

    #[test]
    fn test_greedy_prefers_largest_gain() {
        // Subset 2 covers three elements at once and must be taken first
        // even though subsets 0 and 1 come earlier.
        let instance = instance(4, &[&[0], &[1], &[0, 1, 2], &[3]]);
        let cover = solve(&instance).unwrap();
        assert_eq!(cover[0], 2);
        assert_eq!(cover.len(), 2);
    }

    #[test]
    fn test_unsolvable_instance() {
        // Element 2 appears in no subset.
        let instance = instance(3, &[&[0], &[1]]);
        assert!(matches!(solve(&instance), Err(Error::Unsolvable(_))));
    }

    #[test]
    fn test_unsolvable_reports_no_partial_cover() {
        // Progress is possible at first, then stalls on element 3.
        let instance = instance(4, &[&[0, 1], &[1, 2]]);
        assert!(matches!(solve(&instance), Err(Error::Unsolvable(_))));
    }

    #[test]
    fn test_empty_subsets_never_selected() {
        let instance = instance(2, &[&[], &[0], &[], &[1]]);
        assert_eq!(solve(&instance).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_no_subset_selected_twice() {
        let instance = instance(6, &[&[0, 1, 2], &[2, 3], &[3, 4], &[4, 5], &[5, 0]]);
        let cover = solve(&instance).unwrap();
        let mut seen = HashSet::new();
        for &idx in &cover {
            assert!(seen.insert(idx), "subset {} selected twice", idx);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let instance = instance(
            8,
            &[&[0, 1, 2], &[2, 3, 4], &[4, 5], &[5, 6, 7], &[1, 3, 5, 7], &[0, 6]],
        );
        let first = solve(&instance).unwrap();
        let second = solve(&instance).unwrap();
        assert_eq!(first, second, "identical instances must produce identical covers");
    }

    #[test]
    fn test_greedy_output_is_valid_cover() {
        let instance = instance(
            10,
            &[
                &[0, 1, 2, 3],
                &[2, 3, 4, 5],
                &[5, 6],
                &[6, 7, 8],
                &[8, 9],
                &[0, 9],
            ],
        );
        let cover = solve(&instance).unwrap();
        let report = verify::check(&instance, &cover, None).unwrap();
        assert!(report.valid);
        assert!(report.missing_elements.is_empty());
    }

    #[test]
    fn test_harmonic_approximation_bound() {
        // The two "row" sets cover the universe optimally (k = 2); the pair
        // sets are decoys. Whatever greedy picks must stay within the
        // harmonic bound.
        let instance = instance(
            8,
            &[
                &[0, 1, 2, 3],
                &[4, 5, 6, 7],
                &[0, 4],
                &[1, 5],
                &[2, 6],
                &[3, 7],
            ],
        );
        let cover = solve(&instance).unwrap();
        let optimum = 2;
        let bound = optimum as f64 * harmonic(instance.max_subset_size());
        assert!(
            cover.len() as f64 <= bound,
            "cover size {} exceeds harmonic bound {}",
            cover.len(),
            bound
        );
        assert!(cover.len() >= optimum);
    }

    #[test]
    fn test_exact_on_disjoint_subsets() {
        // Disjoint subsets leave greedy no bad choices: it must match the
        // known optimum of 3.
        let instance = instance(6, &[&[0, 1], &[2, 3], &[4, 5]]);
        assert_eq!(solve(&instance).unwrap().len(), 3);
    }
}
