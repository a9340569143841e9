//! Capability badges and context-window formatting.
//!
//! Badges are a fixed-order projection of a classification's capability
//! profile into opaque display tokens. The order never varies: context
//! size, speed, price, reasoning, vision, tools, locality. Context gets a
//! single badge for the highest threshold met; nothing below 32K.

use serde::{Deserialize, Serialize};

use crate::classifier::capability::{LatencyTier, PriceTier};
use crate::classifier::engine::categorize;
use crate::descriptor::CatalogEntry;

/// A capability badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Context window of a million tokens or more.
    Context1M,
    /// Context window of at least 200K tokens.
    Context200K,
    /// Context window of at least 128K tokens.
    Context128K,
    /// Context window of at least 32K tokens.
    Context32K,
    /// Fast latency tier.
    Speed,
    /// Free to run (locally served).
    PriceFree,
    /// Budget price tier.
    PriceCheap,
    /// Emits explicit reasoning.
    Reasoning,
    /// Accepts image input.
    Vision,
    /// Supports function/tool calling.
    Tools,
    /// Served from a local runtime.
    Local,
}

impl Badge {
    /// Display label, glyph included.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Context1M => "🧠 1M",
            Badge::Context200K => "🧠 200K",
            Badge::Context128K => "🧠 128K",
            Badge::Context32K => "🧠 32K",
            Badge::Speed => "⚡",
            Badge::PriceFree => "💰💰💰",
            Badge::PriceCheap => "💰💰",
            Badge::Reasoning => "🤔",
            Badge::Vision => "👁️",
            Badge::Tools => "🔧",
            Badge::Local => "🔒",
        }
    }

    /// Tooltip description.
    pub fn description(&self) -> &'static str {
        match self {
            Badge::Context1M => "1M token context window",
            Badge::Context200K => "200K token context window",
            Badge::Context128K => "128K token context window",
            Badge::Context32K => "32K token context window",
            Badge::Speed => "Fast responses",
            Badge::PriceFree => "Free to run",
            Badge::PriceCheap => "Budget pricing",
            Badge::Reasoning => "Explicit reasoning",
            Badge::Vision => "Understands images",
            Badge::Tools => "Supports tool calling",
            Badge::Local => "Runs locally",
        }
    }
}

/// Derive the badge sequence for a catalog entry.
///
/// Classifies the entry's effective descriptor, then projects the profile
/// in fixed order. Locality is checked on both the entry and its nested
/// descriptor, so wrapper rows badge correctly either way.
///
/// # Examples
///
/// ```
/// use taxa::classifier::{model_badges, Badge};
/// use taxa::descriptor::{CatalogEntry, ModelDescriptor};
///
/// let entry = CatalogEntry::from_descriptor(ModelDescriptor::new("gpt-4o-mini"));
/// assert_eq!(
///     model_badges(&entry),
///     [
///         Badge::Context128K,
///         Badge::Speed,
///         Badge::PriceCheap,
///         Badge::Vision,
///         Badge::Tools,
///     ]
/// );
/// ```
pub fn model_badges(entry: &CatalogEntry) -> Vec<Badge> {
    let classification = categorize(entry.descriptor());
    let capabilities = classification.capabilities;
    let mut badges = Vec::new();

    // Single badge for the highest context threshold met.
    if let Some(window) = capabilities.context_window {
        if window >= 1_000_000 {
            badges.push(Badge::Context1M);
        } else if window >= 200_000 {
            badges.push(Badge::Context200K);
        } else if window >= 128_000 {
            badges.push(Badge::Context128K);
        } else if window >= 32_000 {
            badges.push(Badge::Context32K);
        }
    }

    if capabilities.latency_tier == Some(LatencyTier::Fast) {
        badges.push(Badge::Speed);
    }

    match capabilities.price_tier {
        Some(PriceTier::Free) => badges.push(Badge::PriceFree),
        Some(PriceTier::Cheap) => badges.push(Badge::PriceCheap),
        _ => {}
    }

    if capabilities.supports_reasoning == Some(true) {
        badges.push(Badge::Reasoning);
    }
    if capabilities.supports_vision == Some(true) {
        badges.push(Badge::Vision);
    }
    if capabilities.supports_tools == Some(true) {
        badges.push(Badge::Tools);
    }

    if entry.is_local() {
        badges.push(Badge::Local);
    }

    badges
}

/// Format a context window as a compact label.
///
/// Unknown or zero windows format as the empty string. Rounding is half
/// away from zero: `1_500_000` formats as `"2M"`, `999_999` as `"1000K"`.
///
/// # Examples
///
/// ```
/// use taxa::classifier::format_context_window;
///
/// assert_eq!(format_context_window(Some(1_000_000)), "1M");
/// assert_eq!(format_context_window(Some(128_000)), "128K");
/// assert_eq!(format_context_window(Some(500)), "500");
/// assert_eq!(format_context_window(None), "");
/// ```
pub fn format_context_window(window: Option<u64>) -> String {
    match window {
        None | Some(0) => String::new(),
        Some(v) if v >= 1_000_000 => {
            format!("{}M", (v as f64 / 1_000_000.0).round() as u64)
        }
        Some(v) if v >= 1_000 => format!("{}K", (v as f64 / 1_000.0).round() as u64),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModelDescriptor;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry::from_descriptor(ModelDescriptor::new(id))
    }

    #[test]
    fn test_badge_order_is_fixed() {
        // fast, cheap, vision, tools, 128K context
        assert_eq!(
            model_badges(&entry("gpt-4o-mini")),
            [
                Badge::Context128K,
                Badge::Speed,
                Badge::PriceCheap,
                Badge::Vision,
                Badge::Tools,
            ]
        );
    }

    #[test]
    fn test_reasoning_precedes_vision() {
        let descriptor = ModelDescriptor::new("o1").capabilities(
            crate::descriptor::ModelCapabilities {
                vision: Some(true),
                tools: None,
                reasoning: None,
            },
        );
        let badges = model_badges(&CatalogEntry::from_descriptor(descriptor));
        let reasoning = badges.iter().position(|b| *b == Badge::Reasoning).unwrap();
        let vision = badges.iter().position(|b| *b == Badge::Vision).unwrap();
        assert!(reasoning < vision);
    }

    #[test]
    fn test_single_context_badge_highest_threshold() {
        let badges = model_badges(&entry("gemini-1.5-pro"));
        assert!(badges.contains(&Badge::Context1M));
        assert!(!badges.contains(&Badge::Context200K));
        assert!(!badges.contains(&Badge::Context128K));
        assert!(!badges.contains(&Badge::Context32K));

        // below 32K: no context badge at all
        let small = CatalogEntry::from_descriptor(
            ModelDescriptor::new("tinymodel").context_length(16000),
        );
        assert!(model_badges(&small)
            .iter()
            .all(|b| !matches!(b, Badge::Context1M
                | Badge::Context200K
                | Badge::Context128K
                | Badge::Context32K)));
    }

    #[test]
    fn test_local_model_badges() {
        let descriptor = ModelDescriptor::new("phi3:latest").owned_by("ollama");
        let badges = model_badges(&CatalogEntry::from_descriptor(descriptor));
        // free price plus the locality marker, nothing else
        assert_eq!(badges, [Badge::PriceFree, Badge::Local]);
    }

    #[test]
    fn test_locality_badge_from_wrapper_fields() {
        let mut wrapped = CatalogEntry::wrapping(ModelDescriptor::new("mystery"));
        wrapped.descriptor.connection_type = Some("local".to_string());
        let badges = model_badges(&wrapped);
        assert!(badges.contains(&Badge::Local));
        // the inner descriptor alone carries no local evidence, so the
        // profile stays non-free; only the locality glyph appears
        assert!(!badges.contains(&Badge::PriceFree));
    }

    #[test]
    fn test_audio_mini_badges() {
        assert_eq!(
            model_badges(&entry("gpt-audio-mini")),
            [Badge::Speed, Badge::PriceCheap]
        );
    }

    #[test]
    fn test_labels_and_descriptions_are_non_empty() {
        let all = [
            Badge::Context1M,
            Badge::Context200K,
            Badge::Context128K,
            Badge::Context32K,
            Badge::Speed,
            Badge::PriceFree,
            Badge::PriceCheap,
            Badge::Reasoning,
            Badge::Vision,
            Badge::Tools,
            Badge::Local,
        ];
        for badge in all {
            assert!(!badge.label().is_empty());
            assert!(!badge.description().is_empty());
        }
    }

    #[test]
    fn test_format_context_window_goldens() {
        assert_eq!(format_context_window(None), "");
        assert_eq!(format_context_window(Some(0)), "");
        assert_eq!(format_context_window(Some(500)), "500");
        assert_eq!(format_context_window(Some(999)), "999");
        assert_eq!(format_context_window(Some(1_000)), "1K");
        assert_eq!(format_context_window(Some(8_192)), "8K");
        assert_eq!(format_context_window(Some(16_385)), "16K");
        assert_eq!(format_context_window(Some(128_000)), "128K");
        assert_eq!(format_context_window(Some(200_000)), "200K");
        assert_eq!(format_context_window(Some(999_999)), "1000K");
        assert_eq!(format_context_window(Some(1_000_000)), "1M");
        assert_eq!(format_context_window(Some(1_500_000)), "2M");
        assert_eq!(format_context_window(Some(2_097_152)), "2M");
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(format_context_window(Some(1_500)), "2K");
        assert_eq!(format_context_window(Some(2_500)), "3K");
        assert_eq!(format_context_window(Some(2_499)), "2K");
    }
}
