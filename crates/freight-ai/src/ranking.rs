//! Ordering and truncation of scored entities.

use crate::scoring::ScoredEntity;
use serde::{Deserialize, Serialize};

/// Scored entities in descending score order, truncated to a caller limit.
/// Ties keep their input order: the sort is stable, so re-ranking an
/// already-ranked list is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedList<T> {
    items: Vec<ScoredEntity<T>>,
}

impl<T> RankedList<T> {
    pub fn items(&self) -> &[ScoredEntity<T>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ScoredEntity<T>> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sort descending by score and keep the top `limit` entries (all when
/// `None`). Empty input yields an empty list.
pub fn rank<T>(mut entities: Vec<ScoredEntity<T>>, limit: Option<usize>) -> RankedList<T> {
    entities.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(limit) = limit {
        entities.truncate(limit);
    }
    RankedList { items: entities }
}

/// Blend logically distinct source groups before ranking: each group
/// contributes up to an even share of the limit from its own top, then the
/// survivors are merged and re-ranked. This keeps one prolific source from
/// crowding out the others.
pub fn rank_blended<T>(groups: Vec<Vec<ScoredEntity<T>>>, limit: usize) -> RankedList<T> {
    if groups.is_empty() || limit == 0 {
        return RankedList { items: Vec::new() };
    }

    let quota = (limit + groups.len() - 1) / groups.len();
    let mut merged = Vec::new();
    for group in groups {
        merged.extend(rank(group, Some(quota)).into_items());
    }

    rank(merged, Some(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoredEntity;

    fn scored(label: &str, score: f64) -> ScoredEntity<String> {
        ScoredEntity {
            entity: label.to_string(),
            score,
            components: Vec::new(),
        }
    }

    #[test]
    fn ranks_descending_and_truncates() {
        let ranked = rank(
            vec![scored("a", 70.0), scored("b", 90.0), scored("c", 80.0)],
            Some(2),
        );

        let scores: Vec<f64> = ranked.items().iter().map(|item| item.score).collect();
        assert_eq!(scores, vec![90.0, 80.0]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let ranked = rank(
            vec![scored("first", 80.0), scored("second", 80.0), scored("top", 95.0)],
            None,
        );

        let labels: Vec<&str> = ranked
            .items()
            .iter()
            .map(|item| item.entity.as_str())
            .collect();
        assert_eq!(labels, vec!["top", "first", "second"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let once = rank(
            vec![scored("a", 61.0), scored("b", 61.0), scored("c", 40.0)],
            Some(3),
        );
        let twice = rank(once.clone().into_items(), Some(3));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let ranked = rank(Vec::<ScoredEntity<String>>::new(), Some(5));
        assert!(ranked.is_empty());
    }

    #[test]
    fn blended_ranking_draws_from_each_group() {
        let registry = vec![scored("r1", 95.0), scored("r2", 94.0), scored("r3", 93.0)];
        let filings = vec![scored("f1", 70.0), scored("f2", 60.0)];
        let trade = vec![scored("t1", 80.0)];

        let ranked = rank_blended(vec![registry, filings, trade], 6);

        let labels: Vec<&str> = ranked
            .items()
            .iter()
            .map(|item| item.entity.as_str())
            .collect();
        // quota of two per group, merged and re-ranked
        assert_eq!(labels, vec!["r1", "r2", "t1", "f1", "f2"]);
    }

    #[test]
    fn blended_ranking_respects_overall_limit() {
        let a = vec![scored("a1", 90.0), scored("a2", 85.0)];
        let b = vec![scored("b1", 88.0), scored("b2", 86.0)];

        let ranked = rank_blended(vec![a, b], 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.items()[0].entity, "a1");
    }
}
