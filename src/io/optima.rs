//! CSV table of precomputed optimal cover sizes.
//!
//! Computing an optimal cover is NP-hard and out of scope, so reference
//! optima are supplied externally as `instance,optimum` CSV records keyed by
//! instance file name. The table only feeds approximation-ratio reporting;
//! the solver never reads it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct OptimumRecord {
    instance: String,
    optimum: usize,
}

/// Known optimal cover sizes, keyed by instance name.
#[derive(Debug, Clone, Default)]
pub struct OptimaTable {
    entries: HashMap<String, usize>,
}

impl OptimaTable {
    /// Loads a table from a CSV file with an `instance,optimum` header.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Reads a table from any reader of CSV data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed CSV or a non-integer optimum.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for record in csv_reader.deserialize() {
            let record: OptimumRecord =
                record.map_err(|e| Error::parse(format!("bad optima record: {}", e)))?;
            entries.insert(record.instance, record.optimum);
        }
        Ok(Self { entries })
    }

    /// Looks up the known optimum for an instance name. A missing entry is
    /// not an error; it just means no ratio can be reported.
    pub fn lookup(&self, instance: &str) -> Option<usize> {
        self.entries.get(instance).copied()
    }

    /// Number of instances with a known optimum.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
