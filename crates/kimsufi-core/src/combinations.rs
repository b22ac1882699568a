use crate::errors::{CoreError, Result};
use crate::options::OptionSet;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// How rows are laid out across family groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CombinationMode {
    /// Every group cycles with a period of its own size. Produces
    /// `product(sizes)` rows but repeats rows when group sizes differ.
    #[default]
    Cycling,
    /// Mixed-radix enumeration: each distinct combination exactly once.
    Cartesian,
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationMode::Cycling => write!(f, "cycling"),
            CombinationMode::Cartesian => write!(f, "cartesian"),
        }
    }
}

impl FromStr for CombinationMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cycling" => Ok(CombinationMode::Cycling),
            "cartesian" => Ok(CombinationMode::Cartesian),
            other => Err(CoreError::InvalidInput(format!(
                "unknown combination mode: {}",
                other
            ))),
        }
    }
}

/// Generate rows with the given mode.
pub fn generate(mode: CombinationMode, options: &OptionSet) -> Vec<OptionSet> {
    match mode {
        CombinationMode::Cycling => combinations(options),
        CombinationMode::Cartesian => cartesian_combinations(options),
    }
}

/// Number of rows: product of the group sizes, 0 without any group.
fn row_count(groups: &[(String, OptionSet)]) -> usize {
    if groups.is_empty() {
        return 0;
    }

    groups.iter().map(|(_, bucket)| bucket.len()).product()
}

/// One row per slot, one option per family in each row.
///
/// Every family column is filled by cycling through that family's options
/// with a period equal to its own size, so with unequal group sizes some
/// combinations repeat and others never appear. Use
/// [`cartesian_combinations`] for a full distinct cross-product.
pub fn combinations(options: &OptionSet) -> Vec<OptionSet> {
    let groups = options.groups();
    let total = row_count(&groups);
    let mut rows = vec![OptionSet::new(); total];

    for (family, bucket) in &groups {
        let size = bucket.len();
        let mut index = 0;

        for (i, row) in rows.iter_mut().enumerate() {
            if i % size == 0 {
                index = 0;
            }

            row.push(bucket.as_slice()[index].clone());
            index += 1;
        }

        trace!("Filled column {} with period {}", family, size);
    }

    rows
}

/// Full cross-product of the family groups, each combination once.
///
/// The first group varies fastest; group `k` advances once every
/// `product(sizes of groups before k)` rows.
pub fn cartesian_combinations(options: &OptionSet) -> Vec<OptionSet> {
    let groups = options.groups();
    let total = row_count(&groups);
    let mut rows = vec![OptionSet::new(); total];
    let mut stride = 1;

    for (family, bucket) in &groups {
        let size = bucket.len();

        for (i, row) in rows.iter_mut().enumerate() {
            row.push(bucket.as_slice()[(i / stride) % size].clone());
        }

        trace!("Filled column {} with stride {}", family, stride);
        stride *= size;
    }

    rows
}
