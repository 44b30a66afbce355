// src/domain/tag/reconcile.rs
//! Pure tag-list logic: one parsing rule for every code path, and an
//! explicit add/remove delta computed before any storage is touched.

use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{ArticleTag, TagId};
use std::collections::HashSet;

/// Splits a raw caller-supplied tag list on commas, trims whitespace,
/// drops empties, and deduplicates preserving first occurrence.
pub fn parse_tag_list(raw: &str) -> DomainResult<Vec<TagId>> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| seen.insert(part.to_string()))
        .map(TagId::new)
        .collect()
}

/// The symmetric difference between an article's current associations and
/// the requested tag set. Tags in both sets keep their existing rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDelta {
    pub to_add: Vec<TagId>,
    pub to_remove: Vec<TagId>,
}

impl TagDelta {
    pub fn between(current: &[ArticleTag], requested: &[TagId]) -> Self {
        let current_ids: HashSet<&TagId> = current.iter().map(|link| &link.tag_id).collect();
        let requested_ids: HashSet<&TagId> = requested.iter().collect();

        let to_add = requested
            .iter()
            .filter(|id| !current_ids.contains(id))
            .cloned()
            .collect();
        let to_remove = current
            .iter()
            .map(|link| &link.tag_id)
            .filter(|id| !requested_ids.contains(*id))
            .cloned()
            .collect();

        Self { to_add, to_remove }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::ArticleId;

    fn tag(id: &str) -> TagId {
        TagId::new(id).unwrap()
    }

    fn link(id: &str) -> ArticleTag {
        ArticleTag {
            article_id: ArticleId::new(1).unwrap(),
            tag_id: tag(id),
        }
    }

    #[test]
    fn parse_splits_on_comma_and_trims() {
        let tags = parse_tag_list("go, storage ,rust").unwrap();
        assert_eq!(tags, vec![tag("go"), tag("storage"), tag("rust")]);
    }

    #[test]
    fn parse_drops_empties_and_duplicates() {
        let tags = parse_tag_list(" ,go,,go , rust,").unwrap();
        assert_eq!(tags, vec![tag("go"), tag("rust")]);
    }

    #[test]
    fn parse_is_case_sensitive() {
        let tags = parse_tag_list("Go,go").unwrap();
        assert_eq!(tags, vec![tag("Go"), tag("go")]);
    }

    #[test]
    fn parse_empty_input_yields_no_tags() {
        assert!(parse_tag_list("").unwrap().is_empty());
        assert!(parse_tag_list(" , ,").unwrap().is_empty());
    }

    #[test]
    fn delta_between_overlapping_sets() {
        let current = vec![link("a"), link("b"), link("c")];
        let requested = vec![tag("b"), tag("d")];

        let delta = TagDelta::between(&current, &requested);
        assert_eq!(delta.to_add, vec![tag("d")]);
        assert_eq!(delta.to_remove, vec![tag("a"), tag("c")]);
    }

    #[test]
    fn delta_of_identical_sets_is_empty() {
        let current = vec![link("a"), link("b")];
        let requested = vec![tag("a"), tag("b")];
        assert!(TagDelta::between(&current, &requested).is_empty());
    }

    #[test]
    fn delta_against_empty_article_adds_everything() {
        let delta = TagDelta::between(&[], &[tag("x"), tag("y")]);
        assert_eq!(delta.to_add, vec![tag("x"), tag("y")]);
        assert!(delta.to_remove.is_empty());
    }
}
