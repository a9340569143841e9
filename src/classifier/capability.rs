//! Capability profile types and inference helpers.
//!
//! Every field of a [`CapabilityProfile`] is optional: absence records
//! that no evidence was found, which downstream layers render differently
//! from an explicit "no". Inference only ever asserts support; nothing in
//! this module writes a negative.

use serde::{Deserialize, Serialize};

use crate::descriptor::ModelDescriptor;
use crate::taxonomy::{
    matches_any, CHEAP_PRICE_HINTS, CONTEXT_MARKERS, FAST_LATENCY_HINTS, OLLAMA_DEFAULT_CONTEXT,
    PREMIUM_PRICE_HINTS, SLOW_LATENCY_HINTS,
};

/// Expected response latency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyTier {
    /// Lightweight models tuned for speed.
    Fast,
    /// Typical latency.
    Medium,
    /// Large or deliberate models.
    Slow,
}

impl LatencyTier {
    /// Get the tier token as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LatencyTier::Fast => "fast",
            LatencyTier::Medium => "medium",
            LatencyTier::Slow => "slow",
        }
    }
}

/// Price class relative to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// No per-token cost (locally served).
    Free,
    /// Budget models.
    Cheap,
    /// Typical pricing.
    Medium,
    /// Flagship pricing.
    Premium,
}

impl PriceTier {
    /// Get the tier token as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Free => "free",
            PriceTier::Cheap => "cheap",
            PriceTier::Medium => "medium",
            PriceTier::Premium => "premium",
        }
    }
}

/// Derived capability profile for one model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    /// Resolved context window in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,

    /// Model accepts image input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_vision: Option<bool>,

    /// Model supports function/tool calling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_tools: Option<bool>,

    /// Model emits explicit reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_reasoning: Option<bool>,

    /// Expected latency class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_tier: Option<LatencyTier>,

    /// Price class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_tier: Option<PriceTier>,
}

/// Resolve the context window for a descriptor.
///
/// Priority order, first evidence wins: declared metadata, configured
/// `num_ctx`, identifier markers (largest first), then the Ollama default
/// for locally-owned models. `id` is the already-lowercased identifier.
pub(crate) fn infer_context_window(descriptor: &ModelDescriptor, id: &str) -> Option<u64> {
    if let Some(declared) = descriptor.declared_context_length() {
        return Some(declared);
    }
    if let Some(configured) = descriptor.configured_num_ctx() {
        return Some(configured);
    }

    for (markers, window) in CONTEXT_MARKERS {
        if matches_any(id, markers) {
            return Some(*window);
        }
    }

    if descriptor.owned_by.as_deref() == Some("ollama") {
        return Some(OLLAMA_DEFAULT_CONTEXT);
    }

    None
}

/// Classify expected latency from the identifier. Total: unmatched ids
/// are `medium`.
pub(crate) fn infer_latency_tier(id: &str) -> LatencyTier {
    if matches_any(id, FAST_LATENCY_HINTS) {
        return LatencyTier::Fast;
    }
    if matches_any(id, SLOW_LATENCY_HINTS) {
        return LatencyTier::Slow;
    }
    LatencyTier::Medium
}

/// Classify price from the identifier. Total: unmatched ids are `medium`.
///
/// `free` is never produced here; it is assigned by the locality rule
/// before this helper runs.
pub(crate) fn infer_price_tier(id: &str) -> PriceTier {
    if matches_any(id, CHEAP_PRICE_HINTS) {
        return PriceTier::Cheap;
    }
    if matches_any(id, PREMIUM_PRICE_HINTS) {
        return PriceTier::Premium;
    }
    PriceTier::Medium
}
