//! Core classification pipeline.
//!
//! `categorize` turns one descriptor into a [`Classification`]: the ordered
//! category set, the derived capability profile, and the primary category.
//! Rule order is fixed and load-bearing:
//!
//! 1. locality (ownership/connection) — also fixes `price_tier = free`
//! 2. name-pattern sweep, in table order
//! 3. context-window inference
//! 4. vision / tools / reasoning inference
//! 5. latency tier, then price tier (unless locality already fixed it)
//! 6. long-context promotion into `documents`
//! 7. `general` fallback, then primary selection
//!
//! `categories` keeps first-insertion order with no duplicates; primary
//! selection takes the first entry that is not `local`/`general`, so the
//! sweep order in the pattern table decides ties.

use serde::{Deserialize, Serialize};

use crate::classifier::capability::{
    infer_context_window, infer_latency_tier, infer_price_tier, CapabilityProfile, PriceTier,
};
use crate::descriptor::ModelDescriptor;
use crate::taxonomy::{
    find, matches_any, Category, CategoryId, LONG_CONTEXT_THRESHOLD, NAME_PATTERNS,
    REASONING_HINTS, TOOL_HINTS, VISION_HINTS,
};

/// Result of classifying one model descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Categories in discovery order, no duplicates.
    pub categories: Vec<CategoryId>,
    /// Derived capability profile.
    pub capabilities: CapabilityProfile,
    /// Most informative category, used for default grouping.
    pub primary: CategoryId,
}

impl Classification {
    /// Whether the given category was discovered.
    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }

    /// Registry definition of the primary category.
    pub fn primary_definition(&self) -> &'static Category {
        find(self.primary)
    }
}

/// Classify one model descriptor.
///
/// Pure function of the descriptor and the static tables; never fails.
/// Missing fields degrade to "unknown" and an unmatched descriptor lands
/// in `general`.
///
/// # Examples
///
/// ```
/// use taxa::classifier::categorize;
/// use taxa::descriptor::ModelDescriptor;
/// use taxa::taxonomy::CategoryId;
///
/// let result = categorize(&ModelDescriptor::new("gpt-4o-mini"));
/// assert_eq!(result.primary, CategoryId::Coding);
/// assert!(result.contains(CategoryId::Fast));
/// assert_eq!(result.capabilities.context_window, Some(128000));
/// ```
pub fn categorize(descriptor: &ModelDescriptor) -> Classification {
    let id = descriptor.id.to_lowercase();
    let name = descriptor.name.to_lowercase();

    let mut categories: Vec<CategoryId> = Vec::new();
    let mut capabilities = CapabilityProfile::default();

    // Locality is intrinsic; name heuristics never override it.
    if descriptor.is_local() {
        categories.push(CategoryId::Local);
        capabilities.price_tier = Some(PriceTier::Free);
    }

    // Name-pattern sweep. One hit claims the category; table order decides
    // which category becomes primary for multi-trait ids.
    for (category, needles) in NAME_PATTERNS {
        if matches_any(&id, needles) || matches_any(&name, needles) {
            push_unique(&mut categories, *category);
        }
    }

    capabilities.context_window = infer_context_window(descriptor, &id);

    if descriptor.declares(|c| c.vision) || matches_any(&id, VISION_HINTS) {
        capabilities.supports_vision = Some(true);
        push_unique(&mut categories, CategoryId::Vision);
    }

    // Tool support is cross-cutting; it never claims a category.
    if descriptor.declares(|c| c.tools) || matches_any(&id, TOOL_HINTS) {
        capabilities.supports_tools = Some(true);
    }

    if descriptor.declares(|c| c.reasoning) || matches_any(&id, REASONING_HINTS) {
        capabilities.supports_reasoning = Some(true);
        push_unique(&mut categories, CategoryId::Analysis);
    }

    capabilities.latency_tier = Some(infer_latency_tier(&id));

    if capabilities.price_tier.is_none() {
        capabilities.price_tier = Some(infer_price_tier(&id));
    }

    if capabilities
        .context_window
        .is_some_and(|window| window >= LONG_CONTEXT_THRESHOLD)
    {
        push_unique(&mut categories, CategoryId::Documents);
    }

    if categories.is_empty() {
        categories.push(CategoryId::General);
    }

    let primary = categories
        .iter()
        .copied()
        .find(|category| !category.is_generic())
        .unwrap_or(categories[0]);

    tracing::trace!(
        "categorized {:?} as {:?} (primary: {})",
        descriptor.id,
        categories,
        primary
    );

    Classification {
        categories,
        capabilities,
        primary,
    }
}

fn push_unique(categories: &mut Vec<CategoryId>, category: CategoryId) {
    if !categories.contains(&category) {
        categories.push(category);
    }
}
