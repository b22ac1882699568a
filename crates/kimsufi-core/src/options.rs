use crate::errors::Result;
use crate::models::OrderOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered collection of chosen options, keyed by family.
///
/// Insertion order is always preserved. Family uniqueness is maintained by
/// [`OptionSet::set`] and [`OptionSet::merge`] only: a set built from raw
/// tokens or iterators may hold several options of the same family until it
/// is [`normalized`](OptionSet::normalized). That is what the combination
/// generator feeds on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<OrderOption>);

impl OptionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from `family=planCode` tokens. Fails on the first malformed token,
    /// without a partial result.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<OrderOption>())
            .collect()
    }

    /// Build from a family -> plan code map, sorted by family.
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        map.iter()
            .map(|(family, plan_code)| OrderOption::new(family.clone(), plan_code.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderOption> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[OrderOption] {
        &self.0
    }

    pub fn push(&mut self, option: OrderOption) {
        self.0.push(option);
    }

    /// First option of `family`, if any was chosen.
    pub fn get(&self, family: &str) -> Option<&OrderOption> {
        self.0.iter().find(|option| option.family == family)
    }

    pub fn contains_family(&self, family: &str) -> bool {
        self.get(family).is_some()
    }

    /// Replace the option of the same family in place, or append it.
    pub fn set(&mut self, option: OrderOption) -> &mut Self {
        match self.0.iter_mut().find(|o| o.family == option.family) {
            Some(existing) => *existing = option,
            None => self.0.push(option),
        }
        self
    }

    /// By-value form of [`OptionSet::set`].
    pub fn with(mut self, option: OrderOption) -> Self {
        self.set(option);
        self
    }

    /// Add the options of `others` whose family the receiver does not already
    /// hold. Families are checked against the receiver as it was before the
    /// merge, so duplicates inside `others` are all appended.
    pub fn merge<I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = OrderOption>,
    {
        let families = self.families();
        for option in others {
            if !families.contains(&option.family) {
                self.0.push(option);
            }
        }
        self
    }

    /// By-value form of [`OptionSet::merge`].
    pub fn merged<I>(mut self, others: I) -> Self
    where
        I: IntoIterator<Item = OrderOption>,
    {
        self.merge(others);
        self
    }

    pub fn families(&self) -> Vec<String> {
        self.0.iter().map(|o| o.family.clone()).collect()
    }

    pub fn plan_codes(&self) -> Vec<String> {
        self.0.iter().map(|o| o.plan_code.clone()).collect()
    }

    /// Partition into (options with exactly `plan_code`, everything else).
    pub fn split_by_plan_code(&self, plan_code: &str) -> (OptionSet, OptionSet) {
        let (matching, other): (Vec<_>, Vec<_>) = self
            .0
            .iter()
            .cloned()
            .partition(|o| o.plan_code == plan_code);

        (OptionSet(matching), OptionSet(other))
    }

    /// Bucket options by family, families in order of first appearance.
    pub fn groups(&self) -> Vec<(String, OptionSet)> {
        let mut groups: Vec<(String, OptionSet)> = Vec::new();

        for option in &self.0 {
            match groups.iter_mut().find(|(family, _)| *family == option.family) {
                Some((_, bucket)) => bucket.push(option.clone()),
                None => groups.push((option.family.clone(), OptionSet(vec![option.clone()]))),
            }
        }

        groups
    }

    pub fn is_normalized(&self) -> bool {
        self.groups().len() == self.len()
    }

    /// Fold every option through [`OptionSet::set`]: one option per family,
    /// the last one seen wins, at the position of the first one.
    pub fn normalized(&self) -> OptionSet {
        self.0
            .iter()
            .cloned()
            .fold(OptionSet::new(), |acc, option| acc.with(option))
    }
}

impl From<Vec<OrderOption>> for OptionSet {
    fn from(options: Vec<OrderOption>) -> Self {
        Self(options)
    }
}

impl From<OptionSet> for Vec<OrderOption> {
    fn from(options: OptionSet) -> Self {
        options.0
    }
}

impl FromIterator<OrderOption> for OptionSet {
    fn from_iter<T: IntoIterator<Item = OrderOption>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<OrderOption> for OptionSet {
    fn extend<T: IntoIterator<Item = OrderOption>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for OptionSet {
    type Item = OrderOption;
    type IntoIter = std::vec::IntoIter<OrderOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a OrderOption;
    type IntoIter = std::slice::Iter<'a, OrderOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
