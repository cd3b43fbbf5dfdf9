use launchkit_ranking::{RankOptions, ResultItem, ResultList, SortField, score};
use proptest::prelude::*;
use std::collections::HashSet;

fn candidate() -> impl Strategy<Value = String> {
    "[a-eA-E0-9 _-]{0,16}"
}

fn query() -> impl Strategy<Value = String> {
    "[a-gA-G0-9]{1,4}"
}

fn list_of(titles: &[String]) -> ResultList {
    titles.iter().map(|title| ResultItem::new(title.clone())).collect()
}

proptest! {
    #[test]
    fn missing_character_scores_zero(q in query(), c in candidate()) {
        let available: HashSet<char> = c.to_lowercase().chars().collect();
        if q.to_lowercase().chars().any(|ch| !available.contains(&ch)) {
            prop_assert_eq!(score(&q, &c), 0.0);
        }
    }

    #[test]
    fn prefix_score_formula(q in query(), rest in candidate()) {
        let c = format!("{q}{rest}");
        let expected = 100.0 - c.chars().count() as f64 / q.chars().count() as f64;
        prop_assert_eq!(score(&q, &c), expected);
    }

    #[test]
    fn ties_keep_insertion_order(q in query(), titles in prop::collection::vec(candidate(), 0..12)) {
        // Tag each title with its index so equal titles stay distinguishable.
        let items: Vec<ResultItem> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| ResultItem::new(title.clone()).with_action("pick", i.to_string()))
            .collect();
        let mut list = ResultList::from(items);
        let options = RankOptions::default().with_sort_by(SortField::Title);
        list.rank(&q, &options).unwrap();

        for pair in list.items().windows(2) {
            let a = score(&q, &pair[0].title);
            let b = score(&q, &pair[1].title);
            prop_assert!(a >= b);
            if a == b {
                let ia: usize = pair[0].action.parameter().parse().unwrap();
                let ib: usize = pair[1].action.parameter().parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn rerank_is_idempotent(
        q in query(),
        titles in prop::collection::vec(candidate(), 0..12),
        min_score in prop_oneof![Just(0.0), 0.0f64..100.0],
        max_results in 0usize..8,
    ) {
        let options = RankOptions::default()
            .with_min_score(min_score)
            .with_max_results(max_results);
        let mut once = list_of(&titles);
        once.rank(&q, &options).unwrap();
        let mut twice = once.clone();
        twice.rank(&q, &options).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn truncation_bounds(
        q in query(),
        titles in prop::collection::vec(candidate(), 0..12),
        max_results in 1usize..8,
    ) {
        let mut list = list_of(&titles);
        list.rank(&q, &RankOptions::default().with_max_results(max_results)).unwrap();
        prop_assert_eq!(list.len(), titles.len().min(max_results));
    }

    #[test]
    fn min_score_filter_is_strict(
        q in query(),
        titles in prop::collection::vec(candidate(), 0..12),
        min_score in 1.0f64..100.0,
    ) {
        let options = RankOptions::default()
            .with_sort_by(SortField::Title)
            .with_min_score(min_score);
        let mut list = list_of(&titles);
        list.rank(&q, &options).unwrap();

        let expected = titles.iter().filter(|t| score(&q, t) > min_score).count();
        prop_assert_eq!(list.len(), expected);
        for item in &list {
            prop_assert!(score(&q, &item.title) > min_score);
        }
    }
}
