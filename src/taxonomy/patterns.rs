//! Recognizer tables for name-based classification.
//!
//! All heuristics live here as static data rather than scattered
//! conditionals: the per-category name-pattern table, the capability hint
//! sets, the latency/price tier tokens, and the context-window markers.
//! Matching is plain lowercase substring containment; identifiers are
//! short and the tables are curated, so there is nothing for a regex
//! engine to add.
//!
//! Table order is load-bearing. The sweep visits categories in
//! declaration order (which fixes the primary category for models that
//! match several), and the context markers are checked top-down so the
//! largest window wins for ids carrying several markers.

use crate::taxonomy::CategoryId;

/// One row of the name-pattern table: (category, substrings that claim it)
pub type NamePatternRow = (CategoryId, &'static [&'static str]);

/// Name-pattern table, in sweep order.
///
/// Only trait categories are pattern-matched. `favorites` is populated by
/// pinning, `local` by ownership rules, `general` by fallback, and
/// `specials` only ever by curation (no name shape reliably identifies
/// audio/realtime/moderation models).
pub static NAME_PATTERNS: &[NamePatternRow] = &[
    // ============================================================
    // Trait categories, in primary-selection precedence order
    // ============================================================
    (
        CategoryId::Coding,
        &[
            "coder",
            "code",
            "codex",
            "copilot",
            "deepseek-coder",
            "starcoder",
            "codellama",
            "phind",
            "wizardcoder",
            "magicoder",
            "codestral",
            "gpt-4",
            "gpt-4o",
            "claude-3-5-sonnet",
            "claude-sonnet",
            "gemini-pro",
            "gemini-2",
        ],
    ),
    (
        CategoryId::Creative,
        &[
            "opus",
            "creative",
            "writer",
            "story",
            "novel",
            "gpt-4",
            "claude-3-opus",
            "claude-opus",
        ],
    ),
    (
        CategoryId::Analysis,
        &[
            "o1",
            "o3",
            "reasoning",
            "think",
            "analyst",
            "research",
            "qwen-qwq",
            "qwq",
            "deepseek-r1",
        ],
    ),
    (
        CategoryId::Fast,
        &[
            "mini",
            "haiku",
            "flash",
            "instant",
            "turbo",
            "small",
            "tiny",
            "nano",
            "phi-3",
            "phi-4",
            "gemma",
            "llama-3.2:1b",
            "llama-3.2:3b",
        ],
    ),
    (
        CategoryId::Vision,
        &[
            "vision",
            "visual",
            "image",
            "multimodal",
            "llava",
            "bakllava",
            "gpt-4o",
            "claude-3",
            "gemini",
        ],
    ),
    (
        CategoryId::Documents,
        &["long", "128k", "200k", "1m", "gemini-pro", "claude-3"],
    ),
];

// ============================================================
// Capability hints (id substrings implying support)
// ============================================================

/// Ids implying image input support.
pub static VISION_HINTS: &[&str] = &["vision", "gpt-4o", "claude-3", "gemini", "llava"];

/// Ids implying function/tool calling support.
pub static TOOL_HINTS: &[&str] = &["gpt-4", "claude", "gemini"];

/// Ids implying explicit reasoning output.
pub static REASONING_HINTS: &[&str] = &["o1", "o3", "qwq", "deepseek-r1"];

// ============================================================
// Tier tokens
// ============================================================

/// Ids implying low latency.
pub static FAST_LATENCY_HINTS: &[&str] = &["flash", "instant", "mini", "haiku", "nano"];

/// Ids implying high latency (large or deliberate models).
pub static SLOW_LATENCY_HINTS: &[&str] = &["opus", "o1", "o3", "pro"];

/// Ids implying budget pricing.
pub static CHEAP_PRICE_HINTS: &[&str] = &["mini", "haiku", "flash", "instant"];

/// Ids implying premium pricing.
pub static PREMIUM_PRICE_HINTS: &[&str] = &["opus", "o1", "o3"];

// ============================================================
// Context-window markers
// ============================================================

/// One row of the context-marker table: (id substrings, window in tokens)
pub type ContextMarkerRow = (&'static [&'static str], u64);

/// Context-window markers, largest first. The first matching row wins.
pub static CONTEXT_MARKERS: &[ContextMarkerRow] = &[
    (&["1m", "gemini-1.5-pro"], 1_000_000),
    (&["200k", "claude-3"], 200_000),
    (&["128k", "gpt-4"], 128_000),
    (&["32k"], 32_000),
    (&["16k"], 16_000),
];

/// Default context window for Ollama-served models with no declared size.
pub const OLLAMA_DEFAULT_CONTEXT: u64 = 8192;

/// Window size at or above which a model is considered document-grade.
pub const LONG_CONTEXT_THRESHOLD: u64 = 100_000;

/// Whether the haystack contains any of the needles.
///
/// Callers lowercase the haystack once; the tables are already lowercase.
pub fn matches_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
