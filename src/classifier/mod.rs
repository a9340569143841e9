//! Classification engine.
//!
//! The behavioral half of the crate. Four operations, all pure:
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | [`categorize`] | one descriptor → categories + capability profile + primary |
//! | [`group_by_category`] | many entries + pin list → priority-ordered buckets |
//! | [`model_badges`] | one entry → fixed-order display badges |
//! | [`format_context_window`] | token count → compact label ("128K", "1M") |
//!
//! # Example
//!
//! ```
//! use taxa::classifier::categorize;
//! use taxa::descriptor::ModelDescriptor;
//! use taxa::taxonomy::CategoryId;
//!
//! let descriptor = ModelDescriptor::new("deepseek-r1:7b").owned_by("ollama");
//! let result = categorize(&descriptor);
//!
//! assert_eq!(result.categories, [CategoryId::Local, CategoryId::Analysis]);
//! assert_eq!(result.primary, CategoryId::Analysis);
//! assert_eq!(result.capabilities.supports_reasoning, Some(true));
//! ```

mod badges;
mod capability;
mod engine;
mod grouping;

pub use badges::{format_context_window, model_badges, Badge};
pub use capability::{CapabilityProfile, LatencyTier, PriceTier};
pub use engine::{categorize, Classification};
pub use grouping::{group_by_category, CategoryGroup, GroupedModel};
