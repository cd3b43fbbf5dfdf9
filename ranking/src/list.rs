use crate::config::RankOptions;
use crate::error::{RankError, Result};
use crate::item::ResultItem;
use crate::pipeline::{self, RankStats};
use serde::{Deserialize, Serialize};

/// Ordered results for a single query.
///
/// Insertion order is the display order until the list is ranked, and the
/// tie-break order afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList {
    items: Vec<ResultItem>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end. Duplicate titles are allowed.
    pub fn append(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    /// Insert an item at a zero-based position in `0..=len`.
    ///
    /// Positions past the end fail with [`RankError::InvalidPosition`]
    /// instead of being clamped.
    pub fn insert(&mut self, item: ResultItem, position: usize) -> Result<()> {
        let len = self.items.len();
        if position > len {
            return Err(RankError::InvalidPosition { position, len });
        }
        self.items.insert(position, item);
        Ok(())
    }

    /// Insert at the front.
    pub fn prepend(&mut self, item: ResultItem) {
        self.items.insert(0, item);
    }

    /// Rank the list in place. See [`pipeline::rank`].
    pub fn rank(&mut self, query: &str, options: &RankOptions) -> Result<RankStats> {
        pipeline::rank(self, query, options)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<ResultItem> {
        self.items
    }

    pub(crate) fn replace_items(&mut self, items: Vec<ResultItem>) {
        self.items = items;
    }

    pub(crate) fn take_items(&mut self) -> Vec<ResultItem> {
        std::mem::take(&mut self.items)
    }
}

impl From<Vec<ResultItem>> for ResultList {
    fn from(items: Vec<ResultItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<ResultItem> for ResultList {
    fn from_iter<I: IntoIterator<Item = ResultItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultList {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a ResultItem;
    type IntoIter = std::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
