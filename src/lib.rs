//! # Taxa - Model Taxonomy Engine
//!
//! Semantic categorization, capability profiling, and curated grouping for
//! LLM catalogs. Given an arbitrary model descriptor (id, display name,
//! ownership, declared metadata), the engine derives a stable set of
//! category tags, a capability profile, and a single primary category used
//! for grouping and ordering.
//!
//! ## Features
//!
//! - **Pure and stateless**: every operation is a synchronous function of
//!   its input plus compile-time tables; safe to call concurrently
//! - **Permissive input**: descriptors deserialize from the loose shapes
//!   catalogs actually ship (`id`/`value`, `name`/`label`, nested wrappers)
//! - **Evidence-based capabilities**: a capability field is set only when
//!   evidence exists; absence means "unknown", never "no"
//! - **Static heuristic tables**: patterns, tier tokens, and curated lists
//!   are data, auditable and testable in isolation
//! - **Pricing normalization**: loosely-keyed pricing rows map to uniform
//!   per-million-USD records
//!
//! ## Categories
//!
//! | Category | Priority | Populated by |
//! |-----------|----------|-------------------------------------|
//! | favorites | 0 | caller pin list (grouping only) |
//! | coding | 1 | name patterns |
//! | creative | 2 | name patterns |
//! | analysis | 3 | name patterns, reasoning inference |
//! | fast | 4 | name patterns |
//! | local | 5 | ownership/connection rule |
//! | vision | 6 | name patterns, vision inference |
//! | documents | 7 | name patterns, long-context promotion |
//! | specials | 8 | curation only (no pattern route) |
//! | general | 99 | fallback |
//!
//! ## Classification Pipeline
//!
//! ```text
//! descriptor
//!     │ normalize (lowercase id/name, empty on absence)
//!     v
//! locality rule ──> pattern sweep ──> capability inference
//!     (local, free)    (table order)    (context, vision, tools,
//!                                        reasoning, latency, price)
//!     │
//!     v
//! long-context promotion ──> general fallback ──> primary selection
//!     (≥100K ⇒ documents)       (empty ⇒ general)    (first non-generic)
//! ```
//!
//! ## Quick Start
//!
//! ### Classify one model
//!
//! ```rust
//! use taxa::{categorize, CategoryId, ModelDescriptor};
//!
//! let result = categorize(&ModelDescriptor::new("deepseek-r1:7b").owned_by("ollama"));
//!
//! assert_eq!(result.categories, [CategoryId::Local, CategoryId::Analysis]);
//! assert_eq!(result.primary, CategoryId::Analysis);
//! assert_eq!(result.capabilities.supports_reasoning, Some(true));
//! assert_eq!(result.capabilities.context_window, Some(8192));
//! ```
//!
//! ### Group a catalog
//!
//! ```rust
//! use taxa::{group_by_category, CatalogEntry, CategoryId, ModelDescriptor};
//!
//! let catalog = vec![
//!     CatalogEntry::from_descriptor(ModelDescriptor::new("gpt-4o")),
//!     CatalogEntry::from_descriptor(ModelDescriptor::new("o1")),
//!     CatalogEntry::from_descriptor(ModelDescriptor::new("phi3:latest").owned_by("ollama")),
//! ];
//! let pinned = vec!["o1".to_string()];
//!
//! let groups = group_by_category(&catalog, &pinned);
//!
//! // favorites lead; the pinned model also keeps its natural bucket
//! assert_eq!(groups[0].category.id, CategoryId::Favorites);
//! assert!(groups[0].models[0].pinned);
//! assert!(groups.iter().any(|g| g.category.id == CategoryId::Analysis));
//! ```
//!
//! ### Badges and labels
//!
//! ```rust
//! use taxa::{format_context_window, model_badges, Badge, CatalogEntry, ModelDescriptor};
//!
//! let entry = CatalogEntry::from_descriptor(ModelDescriptor::new("gpt-4o-mini"));
//! let badges = model_badges(&entry);
//!
//! assert_eq!(badges[0], Badge::Context128K);
//! assert_eq!(badges[0].label(), "🧠 128K");
//! assert_eq!(format_context_window(Some(128_000)), "128K");
//! ```
//!
//! ### Normalize pricing rows
//!
//! ```rust
//! use serde_json::json;
//! use taxa::normalize_pricing_row;
//!
//! let record = normalize_pricing_row(&json!({
//!     "model": "gpt-4o",
//!     "provider": "openai",
//!     "input_cost_per_1k": 0.0025,
//!     "output_cost_per_1k": 0.01,
//! }))
//! .unwrap();
//!
//! assert_eq!(record.input_usd_per_million, 2.5);
//! assert!((record.cost(1000, 500) - 0.0075).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`taxonomy`]: category registry, recognizer tables, curated lists
//! - [`classifier`]: categorization, grouping, badges, formatting
//! - [`descriptor`]: canonical descriptor types and shape normalization
//! - [`pricing`]: pricing row normalization
//! - [`error`]: error types and result alias

pub mod classifier;
pub mod descriptor;
pub mod error;
pub mod pricing;
pub mod taxonomy;

// Re-exports for convenience
pub use classifier::{
    categorize, format_context_window, group_by_category, model_badges, Badge, CapabilityProfile,
    CategoryGroup, Classification, GroupedModel, LatencyTier, PriceTier,
};
pub use descriptor::{CatalogEntry, ModelCapabilities, ModelDescriptor};
pub use error::{Result, TaxaError};
pub use pricing::{normalize_pricing_row, normalize_pricing_rows, PricingRecord};
pub use taxonomy::{Category, CategoryId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Classify a model known only by its identifier.
///
/// ```
/// use taxa::{categorize_id, CategoryId};
///
/// assert_eq!(categorize_id("gpt-4o-mini").primary, CategoryId::Coding);
/// assert_eq!(categorize_id("unheard-of").primary, CategoryId::General);
/// ```
pub fn categorize_id(id: &str) -> Classification {
    categorize(&ModelDescriptor::new(id))
}
