use crate::config::{RankOptions, SortField};
use crate::error::{RankError, Result};
use crate::item::ResultItem;
use crate::list::ResultList;
use crate::scorer::score;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What a ranking call did to the list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankStats {
    /// Items in the list before ranking
    pub candidates: usize,

    /// Items with a non-zero score
    pub matched: usize,

    /// Items dropped by the minimum-score filter
    pub filtered_out: usize,

    /// Items dropped by the result limit
    pub truncated: usize,

    /// Best score seen, if the list was not empty
    pub top_score: Option<f64>,
}

/// The text of `item` that `field` selects for scoring.
pub fn selected_text(item: &ResultItem, field: SortField) -> Cow<'_, str> {
    match field {
        SortField::Title => Cow::Borrowed(&item.title),
        SortField::Subtitle => Cow::Borrowed(&item.subtitle),
        SortField::TitleAndSubtitle => Cow::Owned(format!("{} {}", item.title, item.subtitle)),
    }
}

/// Rank `list` in place against `query`.
///
/// Items are ordered by descending score; ties keep their previous relative
/// order. With a non-zero `min_score` only items scoring strictly above it
/// survive, and with a non-zero `max_results` the list is cut to that many.
///
/// Fails with [`RankError::EmptyQuery`] for an empty query. On any error the
/// list is left exactly as it was.
pub fn rank(list: &mut ResultList, query: &str, options: &RankOptions) -> Result<RankStats> {
    if query.is_empty() {
        return Err(RankError::EmptyQuery);
    }
    options.validate()?;

    let query = query.to_lowercase();
    let mut stats = RankStats {
        candidates: list.len(),
        ..Default::default()
    };

    // Scores are computed once per item; the stable sort keeps insertion
    // order among equal scores.
    let mut scored: Vec<(f64, ResultItem)> = list
        .take_items()
        .into_iter()
        .map(|item| (score(&query, &selected_text(&item, options.sort_by)), item))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    stats.matched = scored.iter().filter(|(s, _)| *s != 0.0).count();
    stats.top_score = scored.first().map(|(s, _)| *s);

    if options.min_score != 0.0 {
        let before = scored.len();
        scored.retain(|(s, _)| *s > options.min_score);
        stats.filtered_out = before - scored.len();
    }

    if options.max_results != 0 && scored.len() >= options.max_results {
        stats.truncated = scored.len() - options.max_results;
        scored.truncate(options.max_results);
    }

    list.replace_items(scored.into_iter().map(|(_, item)| item).collect());

    debug!(
        "Ranked {} items for '{}' by {}: {} matched, {} below {}, {} truncated",
        stats.candidates,
        query,
        options.sort_by,
        stats.matched,
        stats.filtered_out,
        options.min_score,
        stats.truncated
    );

    Ok(stats)
}
