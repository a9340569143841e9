//! Curated model preference lists.
//!
//! Hand-picked, ordered model identifiers per category, consumed by
//! presentation layers for default ordering. The classifier never writes
//! to this table; it is editorial data, maintained by hand.
//!
//! Note the `specials` bucket: it is the only route into that category.
//! No name pattern covers audio/realtime/moderation models, so a model
//! like `gpt-audio-mini` classifies as `fast` (via "mini") while still
//! being curated under `specials`.

use phf::phf_map;

use crate::taxonomy::CategoryId;

/// Curated model ids per category token, in preference order.
pub static CURATED_MODELS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "coding" => &[
        "gpt-5-codex",
        "gpt-5.1-codex",
        "cognitia_llm_zerogpu.mistral-7b",
    ],
    "creative" => &[
        "gpt-4o",
        "gpt-4.1",
        "cognitia_llm_zerogpu.qwen2.5-7b",
    ],
    "analysis" => &[
        "o3",
        "o1",
        "gpt-5",
    ],
    "fast" => &[
        "gpt-4o-mini",
        "gpt-5-mini",
        "cognitia_llm_zerogpu.phi3",
        "cognitia_llm_zerogpu.smollm2-1.7b",
    ],
    "local" => &[
        "phi3:latest",
        "cognitia_llm_zerogpu.phi3",
        "cognitia_llm_zerogpu.qwen2.5-7b",
        "cognitia_llm_zerogpu.smollm2-1.7b",
        "cognitia_llm_zerogpu.mistral-7b",
    ],
    "vision" => &[
        "gpt-4o",
        "gpt-4o-mini",
    ],
    "documents" => &[
        "gpt-4.1",
        "gpt-5",
    ],
    "general" => &[
        "gpt-4o",
        "gpt-5-mini",
        "cognitia_llm_zerogpu.qwen2.5-7b",
    ],
    "specials" => &[
        "gpt-audio-mini",
        "gpt-realtime-mini",
        "gpt-image-1",
        "omni-moderation-latest",
        "gpt-4o-search-preview",
    ],
};

/// Curated model ids for a category, empty when none are curated.
pub fn curated_for(id: CategoryId) -> &'static [&'static str] {
    CURATED_MODELS.get(id.as_str()).copied().unwrap_or(&[])
}

/// Position of a model in a category's preference order.
pub fn curated_rank(id: CategoryId, model_id: &str) -> Option<usize> {
    curated_for(id).iter().position(|m| *m == model_id)
}

/// Whether a model is curated under the given category.
pub fn is_curated(id: CategoryId, model_id: &str) -> bool {
    curated_rank(id, model_id).is_some()
}
