//! Reader and writer for set cover instances in Beasley OR-library format.
//!
//! See <http://people.brunel.ac.uk/~mastjjb/jeb/orlib/scpinfo.html> for the
//! base format. Two extensions are accepted:
//!
//! - Comment lines, indicated by a leading `#` (possibly preceded by
//!   whitespace).
//! - The pseudo-comment `##setfile`, anywhere in the file, switching to the
//!   set-oriented layout: instead of listing, per element, the (1-origin)
//!   sets containing it, the file lists, per set, the (0-origin) elements it
//!   contains.
//!
//! Both layouts start with the universe size, the set count, and one positive
//! weight per set. The weights are required by the format and validated, but
//! the unweighted greedy solver never consults them, so they are not retained
//! on the loaded instance.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::cover::SetCoverInstance;
use crate::error::{Error, Result};

/// A comment-aware stream of whitespace-separated integers.
struct IntStream {
    ints: Vec<usize>,
    next: usize,
    setfile: bool,
}

impl IntStream {
    fn read(reader: impl BufRead) -> Result<Self> {
        let mut ints = Vec::new();
        let mut setfile = false;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if let Some(comment) = line.strip_prefix('#') {
                if comment == "#setfile" {
                    setfile = true;
                }
                continue;
            }
            for token in line.split_whitespace() {
                let value = token
                    .parse::<usize>()
                    .map_err(|_| Error::parse(format!("expected an integer, found {:?}", token)))?;
                ints.push(value);
            }
        }
        Ok(Self {
            ints,
            next: 0,
            setfile,
        })
    }

    fn next_int(&mut self, what: &str) -> Result<usize> {
        let value = self
            .ints
            .get(self.next)
            .copied()
            .ok_or_else(|| Error::parse(format!("input ended while reading {}", what)))?;
        self.next += 1;
        Ok(value)
    }

    fn take(&mut self, count: usize, what: &str) -> Result<&[usize]> {
        if self.next + count > self.ints.len() {
            return Err(Error::parse(format!("input ended while reading {}", what)));
        }
        self.next += count;
        Ok(&self.ints[self.next - count..self.next])
    }

    /// Errors unless every value has been consumed.
    fn finish(&self) -> Result<()> {
        if self.next != self.ints.len() {
            return Err(Error::parse(format!(
                "{} trailing values after the instance",
                self.ints.len() - self.next
            )));
        }
        Ok(())
    }
}

/// Loads a set cover instance from a file in OR-library or setfile format.
pub fn load(path: impl AsRef<Path>) -> Result<SetCoverInstance> {
    parse(BufReader::new(File::open(path)?))
}

/// Parses a set cover instance from any buffered reader.
///
/// # Errors
///
/// Returns [`Error::Parse`] for non-integer tokens, truncated or trailing
/// data, out-of-range set indices, or non-positive weights, and
/// [`Error::InvalidInstance`] when the decoded instance fails validation.
pub fn parse(reader: impl BufRead) -> Result<SetCoverInstance> {
    let mut stream = IntStream::read(reader)?;
    let universe_size = stream.next_int("universe size")?;
    let set_count = stream.next_int("set count")?;
    let weights = stream.take(set_count, "weights")?.to_vec();
    if let Some(pos) = weights.iter().position(|&w| w == 0) {
        return Err(Error::parse(format!("weight of set {} must be positive", pos)));
    }

    let subsets = if stream.setfile {
        parse_setfile_body(&mut stream, set_count)?
    } else {
        parse_orlib_body(&mut stream, universe_size, set_count)?
    };
    stream.finish()?;

    SetCoverInstance::new(universe_size, subsets)
}

/// OR-library body: for each universe element, the count of sets containing
/// it followed by that many 1-origin set indices.
fn parse_orlib_body(
    stream: &mut IntStream,
    universe_size: usize,
    set_count: usize,
) -> Result<Vec<HashSet<usize>>> {
    let mut subsets = vec![HashSet::new(); set_count];
    for element in 0..universe_size {
        let members = stream.next_int("set-membership count")?;
        for &set_index in stream.take(members, "set indices")? {
            if set_index == 0 || set_index > set_count {
                return Err(Error::parse(format!(
                    "element {} names set {} but sets are numbered 1..={}",
                    element, set_index, set_count
                )));
            }
            subsets[set_index - 1].insert(element);
        }
    }
    Ok(subsets)
}

/// setfile body: for each set, the count of elements it contains followed by
/// that many 0-origin element ids. Unlike the OR layout, the setfile layout
/// does not accept replicated sets.
fn parse_setfile_body(stream: &mut IntStream, set_count: usize) -> Result<Vec<HashSet<usize>>> {
    let mut subsets: Vec<HashSet<usize>> = Vec::with_capacity(set_count);
    let mut seen: HashSet<BTreeSet<usize>> = HashSet::new();
    for index in 0..set_count {
        let size = stream.next_int("set size")?;
        let elements = stream.take(size, "set elements")?;
        if !seen.insert(elements.iter().copied().collect()) {
            return Err(Error::parse(format!(
                "set {} replicates an earlier set; the setfile format forbids repeats",
                index
            )));
        }
        subsets.push(elements.iter().copied().collect());
    }
    Ok(subsets)
}

/// Writes an instance to a file in OR-library format. See [`write`].
pub fn save(instance: &SetCoverInstance, path: impl AsRef<Path>) -> Result<()> {
    write(instance, File::create(path)?)
}

/// Writes an instance in OR-library format: the column-wise layout listing,
/// per universe element, the 1-origin sets containing it, with a comment
/// heading each section.
///
/// The crate does not retain weights, so every set is written with weight 1.
/// Set indices are written in ascending order, making the output
/// deterministic for a given instance.
pub fn write(instance: &SetCoverInstance, mut writer: impl Write) -> Result<()> {
    let subsets = instance.subsets();

    // Invert the table: which sets contain each element.
    let mut members = vec![Vec::new(); instance.universe_size()];
    for (idx, subset) in subsets.iter().enumerate() {
        for &element in subset {
            members[element].push(idx + 1);
        }
    }

    writeln!(writer, "# Universe count")?;
    writeln!(writer, "{}", instance.universe_size())?;
    writeln!(writer, "# Number of sets")?;
    writeln!(writer, "{}", subsets.len())?;
    writeln!(writer, "# Weights")?;
    let weights = vec!["1"; subsets.len()];
    writeln!(writer, "{}", weights.join(" "))?;
    for (element, sets) in members.iter_mut().enumerate() {
        sets.sort_unstable();
        writeln!(writer, "# Item {}", element)?;
        writeln!(writer, "{}", sets.len())?;
        let indices: Vec<String> = sets.iter().map(usize::to_string).collect();
        writeln!(writer, "{}", indices.join(" "))?;
    }
    Ok(())
}
