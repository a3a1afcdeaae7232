//! Instance loading and reference data.
//!
//! Peripheral I/O around the solver: [`orfile`] reads set cover instances in
//! Beasley OR-library format (and the setfile extension), and [`optima`]
//! reads a CSV table of precomputed optimal cover sizes used to report
//! approximation ratios.

pub mod optima;
pub mod orfile;

pub use optima::OptimaTable;
pub use orfile::{load, parse, save, write};
