//! Greedy approximation for the minimum set cover problem.
//!
//! Given a universe of elements `0..N-1` and a family of candidate subsets,
//! [`cover::greedy::solve`] selects subsets by repeatedly taking the one
//! covering the most still-uncovered elements, producing a cover within a
//! `H(max subset size)` factor of optimal. [`cover::verify::check`] validates
//! any proposed cover and reports its approximation ratio against a known
//! optimum. The [`io`] module loads instances in Beasley OR-library format
//! and reference optima from CSV.
//!
//! # Examples
//!
//! ```
//! use setcover::{greedy_cover, verify_cover, SetCoverInstance};
//! use std::collections::HashSet;
//!
//! let subsets: Vec<HashSet<usize>> = vec![
//!     [0, 1, 2].into_iter().collect(),
//!     [2, 3].into_iter().collect(),
//!     [3, 4].into_iter().collect(),
//! ];
//! let instance = SetCoverInstance::new(5, subsets).unwrap();
//! let cover = greedy_cover(&instance).unwrap();
//! assert_eq!(cover, vec![0, 1, 2]);
//! assert!(verify_cover(&instance, &cover, None).unwrap().valid);
//! ```

pub mod cover;
pub mod error;
pub mod io;

pub use cover::{greedy_cover, harmonic, verify_cover, SetCoverInstance, VerifyReport};
pub use error::{Error, Result};
