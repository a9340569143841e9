//! Catalog grouping.
//!
//! Partitions catalog entries into per-category buckets for pickers:
//! every entry lands in its primary category's bucket, pinned entries are
//! additionally copied into `favorites`, empty buckets are dropped, and
//! the result is ordered by category priority.

use serde::Serialize;

use crate::classifier::engine::categorize;
use crate::descriptor::CatalogEntry;
use crate::taxonomy::{by_priority, Category, CategoryId, CATEGORIES};

/// One catalog entry annotated with its classification.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedModel {
    /// The original entry, untouched.
    pub entry: CatalogEntry,
    /// Categories discovered for the entry's effective descriptor.
    pub categories: Vec<CategoryId>,
    /// Whether this copy sits in `favorites` because of a pin.
    pub pinned: bool,
}

/// One non-empty category bucket.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    /// Registry definition for the bucket.
    pub category: &'static Category,
    /// Entries whose primary category this is, in input order.
    pub models: Vec<GroupedModel>,
}

/// Partition entries into priority-ordered category groups.
///
/// Each entry is classified once, against its effective descriptor. A
/// pinned entry appears twice: annotated `pinned` in `favorites` and
/// plain in its natural bucket. Input order is preserved inside each
/// bucket; buckets that end up empty are omitted.
///
/// # Examples
///
/// ```
/// use taxa::classifier::group_by_category;
/// use taxa::descriptor::{CatalogEntry, ModelDescriptor};
/// use taxa::taxonomy::CategoryId;
///
/// let entries = vec![
///     CatalogEntry::from_descriptor(ModelDescriptor::new("gpt-4o")),
///     CatalogEntry::from_descriptor(ModelDescriptor::new("o1")),
/// ];
/// let groups = group_by_category(&entries, &["o1".to_string()]);
///
/// // favorites first, then coding, then analysis
/// assert_eq!(groups[0].category.id, CategoryId::Favorites);
/// assert!(groups[0].models[0].pinned);
/// ```
pub fn group_by_category(entries: &[CatalogEntry], pinned: &[String]) -> Vec<CategoryGroup> {
    let mut buckets: Vec<Vec<GroupedModel>> = vec![Vec::new(); CATEGORIES.len()];

    for entry in entries {
        let classification = categorize(entry.descriptor());
        let selector = entry.selector();

        if pinned.iter().any(|p| p == selector) {
            buckets[CategoryId::Favorites as usize].push(GroupedModel {
                entry: entry.clone(),
                categories: classification.categories.clone(),
                pinned: true,
            });
        }

        buckets[classification.primary as usize].push(GroupedModel {
            entry: entry.clone(),
            categories: classification.categories,
            pinned: false,
        });
    }

    let mut groups = Vec::new();
    for &category in by_priority() {
        let models = std::mem::take(&mut buckets[category.id as usize]);
        if !models.is_empty() {
            groups.push(CategoryGroup { category, models });
        }
    }

    tracing::debug!(
        "grouped {} entries into {} non-empty categories",
        entries.len(),
        groups.len()
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModelDescriptor;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry::from_descriptor(ModelDescriptor::new(id))
    }

    #[test]
    fn test_pinned_entry_appears_twice() {
        let entries = vec![entry("gpt-4o"), entry("o1"), entry("mystery-model")];
        let groups = group_by_category(&entries, &["o1".to_string()]);

        let favorites = &groups[0];
        assert_eq!(favorites.category.id, CategoryId::Favorites);
        assert_eq!(favorites.models.len(), 1);
        assert!(favorites.models[0].pinned);
        assert_eq!(favorites.models[0].entry.descriptor().id, "o1");

        // the same model also sits in its natural bucket, unpinned
        let analysis = groups
            .iter()
            .find(|g| g.category.id == CategoryId::Analysis)
            .unwrap();
        assert_eq!(analysis.models.len(), 1);
        assert!(!analysis.models[0].pinned);
        assert_eq!(analysis.models[0].entry.descriptor().id, "o1");
    }

    #[test]
    fn test_groups_sorted_by_priority_and_empty_dropped() {
        let entries = vec![entry("phi3:latest"), entry("gpt-4o"), entry("o1")];
        let mut local = entry("llama-local");
        local.descriptor.owned_by = Some("ollama".to_string());

        let mut all = entries;
        all.push(local);

        let groups = group_by_category(&all, &[]);
        let ids: Vec<CategoryId> = groups.iter().map(|g| g.category.id).collect();
        assert_eq!(
            ids,
            [
                CategoryId::Coding,
                CategoryId::Analysis,
                CategoryId::Local,
                CategoryId::General,
            ]
        );
        assert!(groups
            .windows(2)
            .all(|w| w[0].category.priority <= w[1].category.priority));
    }

    #[test]
    fn test_wrapper_entries_classify_inner_descriptor() {
        let wrapped = CatalogEntry::wrapping(ModelDescriptor::new("claude-3-opus"))
            .with_value("anthropic/claude-3-opus");
        let groups = group_by_category(&[wrapped], &[]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.id, CategoryId::Creative);
        assert!(groups[0].models[0]
            .categories
            .contains(&CategoryId::Documents));
    }

    #[test]
    fn test_pin_matches_selection_value() {
        let wrapped = CatalogEntry::wrapping(ModelDescriptor::new("claude-3-opus"))
            .with_value("anthropic/claude-3-opus");
        let groups = group_by_category(&[wrapped], &["anthropic/claude-3-opus".to_string()]);
        assert_eq!(groups[0].category.id, CategoryId::Favorites);
        assert!(groups[0].models[0].pinned);
    }

    #[test]
    fn test_input_order_preserved_within_bucket() {
        let entries = vec![entry("codestral-22b"), entry("gpt-4o"), entry("starcoder")];
        let groups = group_by_category(&entries, &[]);
        let coding = groups
            .iter()
            .find(|g| g.category.id == CategoryId::Coding)
            .unwrap();
        let order: Vec<&str> = coding
            .models
            .iter()
            .map(|m| m.entry.descriptor().id.as_str())
            .collect();
        assert_eq!(order, ["codestral-22b", "gpt-4o", "starcoder"]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_category(&[], &["o1".to_string()]).is_empty());
    }
}
