//! Category registry, recognizer tables, and curated lists.
//!
//! This module is the static-data half of the engine:
//! - Category definitions with display metadata and sort priorities
//! - Name-pattern and capability-hint tables driving classification
//! - Hand-curated per-category model preference lists
//!
//! All tables are read-only after process start; the classifier consumes
//! them but never mutates them.
//!
//! # Example
//!
//! ```
//! use taxa::taxonomy::{self, CategoryId};
//!
//! let coding = taxonomy::find(CategoryId::Coding);
//! assert_eq!(coding.priority, 1);
//!
//! // Priority-ordered view: favorites first, general last
//! let ordered = taxonomy::by_priority();
//! assert_eq!(ordered[0].id, CategoryId::Favorites);
//! assert_eq!(ordered[ordered.len() - 1].id, CategoryId::General);
//! ```

mod category;
mod curated;
mod patterns;

pub use category::{by_priority, find, lookup, Category, CategoryId, CATEGORIES};
pub use curated::{curated_for, curated_rank, is_curated, CURATED_MODELS};
pub use patterns::{
    matches_any, ContextMarkerRow, NamePatternRow, CHEAP_PRICE_HINTS, CONTEXT_MARKERS,
    FAST_LATENCY_HINTS, LONG_CONTEXT_THRESHOLD, NAME_PATTERNS, OLLAMA_DEFAULT_CONTEXT,
    PREMIUM_PRICE_HINTS, REASONING_HINTS, SLOW_LATENCY_HINTS, TOOL_HINTS, VISION_HINTS,
};
