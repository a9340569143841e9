//! Model descriptor data structures.
//!
//! This module defines the input side of the classification engine:
//! - `ModelDescriptor`: canonical descriptor (id, display name, ownership,
//!   connection kind, declared metadata)
//! - `ModelInfo` / `ModelMeta` / `ModelCapabilities` / `ModelParams`:
//!   the nested metadata blocks providers attach to their listings
//! - `CatalogEntry`: a catalog row, either a bare descriptor or a wrapper
//!   holding a nested `model` plus a selection `value`
//!
//! Catalog payloads are duck-typed in the wild: the identifier may arrive
//! as `id` or `value`, the display name as `name` or `label`, and every
//! field may be missing. Deserialization normalizes all accepted shapes
//! into the canonical form (`id` wins over `value`, `name` over `label`);
//! ownership and connection kind are lowercased so later comparisons are
//! case-insensitive. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Declared capability flags from provider metadata.
///
/// A missing flag means the provider said nothing, not that the capability
/// is absent. Only an explicit `true` counts as a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    /// Model accepts image input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<bool>,

    /// Model supports function/tool calling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<bool>,

    /// Model emits explicit reasoning traces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<bool>,
}

/// Provider-declared model metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Declared context window in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u64>,

    /// Declared capability flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ModelCapabilities>,
}

/// Runtime parameters attached to local model listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Configured context size (Ollama-style `num_ctx`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u64>,
}

/// Nested info block carrying metadata and runtime parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Provider-declared metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ModelMeta>,

    /// Runtime parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ModelParams>,
}

/// Canonical model descriptor.
///
/// Everything the classifier reads lives here. All fields are optional in
/// the wire shapes; absent strings normalize to empty so substring checks
/// never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct ModelDescriptor {
    /// Model identifier (e.g., "gpt-4o", "deepseek-r1:7b").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Human-readable display name. Case is preserved for presentation;
    /// classification lowercases transiently.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Owning organization or runtime, lowercased ("openai", "ollama", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,

    /// Connection kind, lowercased ("local", "external", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,

    /// Nested metadata block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ModelInfo>,
}

/// Wire-shape mirror of `ModelDescriptor` accepting all field aliases.
///
/// A separate struct rather than serde aliases: payloads may carry both
/// spellings at once (`id` and `value`), and alias attributes reject
/// duplicate keys instead of applying precedence.
#[derive(Debug, Default, Deserialize)]
struct RawDescriptor {
    id: Option<String>,
    value: Option<String>,
    name: Option<String>,
    label: Option<String>,
    owned_by: Option<String>,
    connection_type: Option<String>,
    info: Option<ModelInfo>,
}

impl From<RawDescriptor> for ModelDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            id: first_present(raw.id, raw.value),
            name: first_present(raw.name, raw.label),
            owned_by: raw.owned_by.map(|s| s.to_lowercase()),
            connection_type: raw.connection_type.map(|s| s.to_lowercase()),
            info: raw.info,
        }
    }
}

/// First non-empty candidate, or empty when both are absent or blank.
fn first_present(primary: Option<String>, fallback: Option<String>) -> String {
    match primary {
        Some(s) if !s.is_empty() => s,
        _ => fallback.unwrap_or_default(),
    }
}

impl ModelDescriptor {
    /// Create a descriptor with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder: set display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set owning organization (lowercased)
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owned_by = Some(owner.into().to_lowercase());
        self
    }

    /// Builder: set connection kind (lowercased)
    pub fn connection_type(mut self, kind: impl Into<String>) -> Self {
        self.connection_type = Some(kind.into().to_lowercase());
        self
    }

    /// Builder: set declared context length
    pub fn context_length(mut self, tokens: u64) -> Self {
        self.info
            .get_or_insert_with(ModelInfo::default)
            .meta
            .get_or_insert_with(ModelMeta::default)
            .context_length = Some(tokens);
        self
    }

    /// Builder: set configured `num_ctx`
    pub fn num_ctx(mut self, tokens: u64) -> Self {
        self.info
            .get_or_insert_with(ModelInfo::default)
            .params
            .get_or_insert_with(ModelParams::default)
            .num_ctx = Some(tokens);
        self
    }

    /// Builder: set declared capability flags
    pub fn capabilities(mut self, caps: ModelCapabilities) -> Self {
        self.info
            .get_or_insert_with(ModelInfo::default)
            .meta
            .get_or_insert_with(ModelMeta::default)
            .capabilities = Some(caps);
        self
    }

    /// Parse a descriptor from a loose JSON value.
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Declared context length, treating zero as absent.
    pub fn declared_context_length(&self) -> Option<u64> {
        self.info
            .as_ref()
            .and_then(|i| i.meta.as_ref())
            .and_then(|m| m.context_length)
            .filter(|&v| v > 0)
    }

    /// Configured `num_ctx`, treating zero as absent.
    pub fn configured_num_ctx(&self) -> Option<u64> {
        self.info
            .as_ref()
            .and_then(|i| i.params.as_ref())
            .and_then(|p| p.num_ctx)
            .filter(|&v| v > 0)
    }

    /// Whether the given capability flag is declared `true`.
    pub fn declares(&self, pick: impl Fn(&ModelCapabilities) -> Option<bool>) -> bool {
        self.info
            .as_ref()
            .and_then(|i| i.meta.as_ref())
            .and_then(|m| m.capabilities.as_ref())
            .and_then(pick)
            == Some(true)
    }

    /// Whether this descriptor indicates a locally-served model
    /// (Ollama ownership or a local connection kind).
    pub fn is_local(&self) -> bool {
        self.owned_by.as_deref() == Some("ollama")
            || self.connection_type.as_deref() == Some("local")
    }
}

/// A catalog row.
///
/// Catalogs mix two shapes: bare descriptors, and wrapper objects carrying
/// a nested `model` descriptor plus a selection `value`. The wrapper's own
/// descriptor fields deserialize from the top-level keys, so a bare
/// descriptor is just a wrapper with no `model`. A top-level `value` serves
/// double duty: it stays on the entry for pin matching and feeds the own
/// descriptor's id when no `id` key is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct CatalogEntry {
    /// Selection value used by pickers and pin lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Nested descriptor for wrapper-shaped rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Box<ModelDescriptor>>,

    /// The entry's own descriptor fields (the whole object for bare rows).
    #[serde(flatten)]
    pub descriptor: ModelDescriptor,
}

/// Wire-shape mirror of `CatalogEntry`.
#[derive(Debug, Default, Deserialize)]
struct RawEntry {
    value: Option<String>,
    model: Option<ModelDescriptor>,
    id: Option<String>,
    name: Option<String>,
    label: Option<String>,
    owned_by: Option<String>,
    connection_type: Option<String>,
    info: Option<ModelInfo>,
}

impl From<RawEntry> for CatalogEntry {
    fn from(raw: RawEntry) -> Self {
        let descriptor = ModelDescriptor::from(RawDescriptor {
            id: raw.id,
            value: raw.value.clone(),
            name: raw.name,
            label: raw.label,
            owned_by: raw.owned_by,
            connection_type: raw.connection_type,
            info: raw.info,
        });
        Self {
            value: raw.value,
            model: raw.model.map(Box::new),
            descriptor,
        }
    }
}

impl CatalogEntry {
    /// Wrap a bare descriptor.
    pub fn from_descriptor(descriptor: ModelDescriptor) -> Self {
        Self {
            value: None,
            model: None,
            descriptor,
        }
    }

    /// Wrap a nested descriptor (wrapper-shaped row).
    pub fn wrapping(model: ModelDescriptor) -> Self {
        Self {
            value: None,
            model: Some(Box::new(model)),
            descriptor: ModelDescriptor::default(),
        }
    }

    /// Builder: set the selection value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The descriptor classification should run against: the nested
    /// `model` when present, otherwise the entry itself.
    pub fn descriptor(&self) -> &ModelDescriptor {
        self.model.as_deref().unwrap_or(&self.descriptor)
    }

    /// The identifier pin lists match against: the selection `value` when
    /// present, otherwise the entry's own id.
    pub fn selector(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.descriptor.id)
    }

    /// Whether the entry or its nested descriptor indicates a local model.
    pub fn is_local(&self) -> bool {
        self.descriptor.is_local() || self.model.as_deref().is_some_and(ModelDescriptor::is_local)
    }
}
