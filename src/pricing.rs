//! Pricing row normalization.
//!
//! Pricing feeds arrive as loosely-keyed JSON rows: a dozen spellings for
//! the same price field, three different unit conventions, ids under five
//! possible keys. This module maps any accepted shape into a normalized
//! per-million-USD [`PricingRecord`]. Pure data mapping; fetching and
//! caching live with the caller.
//!
//! Unit handling is keyed off the field name: `*_per_token` values are
//! scaled by 1,000,000, `*_per_1k`/`*_per_1000` by 1,000, and everything
//! else is taken as already per-million.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that may carry the model identifier, in precedence order.
static MODEL_ID_KEYS: &[&str] = &["model_id", "id", "model", "name", "slug"];

/// Keys that may carry the provider name, in precedence order.
static PROVIDER_KEYS: &[&str] = &["provider", "vendor", "owned_by"];

/// Keys that may carry the context window, in precedence order.
static CONTEXT_KEYS: &[&str] = &[
    "context_window",
    "context_length",
    "max_context",
    "max_context_window",
];

/// Accepted input-price keys, in precedence order.
static INPUT_PRICE_KEYS: &[&str] = &[
    "input_cost_per_million",
    "input_cost_per_million_tokens",
    "input_usd_per_million",
    "input_price",
    "price_input",
    "input_cost",
    "input_cost_per_1k",
    "input_cost_per_1000",
    "input_cost_per_token",
];

/// Accepted output-price keys, in precedence order.
static OUTPUT_PRICE_KEYS: &[&str] = &[
    "output_cost_per_million",
    "output_cost_per_million_tokens",
    "output_usd_per_million",
    "output_price",
    "price_output",
    "output_cost",
    "output_cost_per_1k",
    "output_cost_per_1000",
    "output_cost_per_token",
];

/// Normalized pricing for one model, USD per million tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    /// Model identifier as published by the pricing source.
    pub model_id: String,

    /// Provider name, empty when the source did not say.
    #[serde(default)]
    pub provider: String,

    /// Input cost in USD per million tokens.
    pub input_usd_per_million: f64,

    /// Output cost in USD per million tokens.
    pub output_usd_per_million: f64,

    /// Context window when the source published one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
}

impl PricingRecord {
    /// Calculate cost in USD for given token counts
    pub fn cost(&self, prompt_tokens: u64, completion_tokens: u64) -> f64 {
        self.input_usd_per_million / 1_000_000.0 * prompt_tokens as f64
            + self.output_usd_per_million / 1_000_000.0 * completion_tokens as f64
    }
}

/// Normalize one loose pricing row.
///
/// Returns `None` for rows that are not objects, carry no usable model
/// id, or carry no parseable price at all. A row with only one of the
/// two prices keeps it and zeroes the other.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taxa::pricing::normalize_pricing_row;
///
/// let record = normalize_pricing_row(&json!({
///     "model": "gpt-4o",
///     "input_cost_per_1k": 0.0025,
///     "output_cost_per_1k": 0.01,
/// }))
/// .unwrap();
///
/// assert_eq!(record.input_usd_per_million, 2.5);
/// assert_eq!(record.output_usd_per_million, 10.0);
/// ```
pub fn normalize_pricing_row(row: &Value) -> Option<PricingRecord> {
    let object = row.as_object()?;

    let model_id = extract_model_id(object)?;
    let input = extract_price(object, INPUT_PRICE_KEYS);
    let output = extract_price(object, OUTPUT_PRICE_KEYS);

    if input.is_none() && output.is_none() {
        tracing::debug!("dropping pricing row for {}: no usable price", model_id);
        return None;
    }

    let provider = first_string(object, PROVIDER_KEYS).unwrap_or_default();

    Some(PricingRecord {
        model_id,
        provider,
        input_usd_per_million: input.unwrap_or(0.0),
        output_usd_per_million: output.unwrap_or(0.0),
        context_window: extract_context(object),
    })
}

/// Normalize a batch of rows, dropping the unusable ones.
pub fn normalize_pricing_rows(rows: &[Value]) -> Vec<PricingRecord> {
    let records: Vec<PricingRecord> = rows.iter().filter_map(normalize_pricing_row).collect();
    tracing::debug!("normalized {} of {} pricing rows", records.len(), rows.len());
    records
}

fn extract_model_id(row: &Map<String, Value>) -> Option<String> {
    for key in MODEL_ID_KEYS {
        if let Some(Value::String(value)) = row.get(*key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

fn first_string(row: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(Value::String(value)) = row.get(*key) {
            if !value.is_empty() {
                return Some(value.clone());
            }
        }
    }
    None
}

/// First present and parseable price among `keys`, scaled to per-million
/// by the unit its key name implies. A present but unusable value falls
/// through to the next key.
fn extract_price(row: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    for key in keys {
        let Some(value) = row.get(*key) else { continue };
        let Some(amount) = numeric(value) else { continue };

        if key.contains("per_token") {
            return Some(amount * 1_000_000.0);
        }
        if key.contains("per_1k") || key.contains("per_1000") {
            return Some(amount * 1_000.0);
        }
        // Assume per-million if the key names no unit
        return Some(amount);
    }
    None
}

fn extract_context(row: &Map<String, Value>) -> Option<u64> {
    for key in CONTEXT_KEYS {
        if let Some(value) = row.get(*key) {
            if let Some(window) = value.as_f64() {
                if window > 0.0 {
                    return Some(window as u64);
                }
            }
        }
    }
    None
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_per_token_scales_to_per_million() {
        let record = normalize_pricing_row(&json!({
            "id": "gpt-4o",
            "input_cost_per_token": 0.0000025,
            "output_cost_per_token": 0.00001,
        }))
        .unwrap();
        assert!((record.input_usd_per_million - 2.5).abs() < 1e-9);
        assert!((record.output_usd_per_million - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_million_taken_as_is() {
        let record = normalize_pricing_row(&json!({
            "model_id": "o1",
            "input_usd_per_million": 15.0,
            "output_usd_per_million": 60.0,
            "provider": "openai",
        }))
        .unwrap();
        assert_eq!(record.input_usd_per_million, 15.0);
        assert_eq!(record.output_usd_per_million, 60.0);
        assert_eq!(record.provider, "openai");
    }

    #[test]
    fn test_key_precedence_follows_declaration_order() {
        // both spellings present: the per-million key is listed first
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "input_cost_per_million": 3.0,
            "input_cost_per_token": 0.5,
            "output_cost_per_million": 6.0,
        }))
        .unwrap();
        assert_eq!(record.input_usd_per_million, 3.0);
    }

    #[test]
    fn test_unusable_value_falls_through_to_next_key() {
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "input_cost_per_million": null,
            "input_cost_per_1k": 0.003,
        }))
        .unwrap();
        assert_eq!(record.input_usd_per_million, 3.0);
    }

    #[test]
    fn test_string_prices_parse() {
        let record = normalize_pricing_row(&json!({
            "slug": "claude-3-opus",
            "input_price": "15.00",
            "output_price": "75.00",
        }))
        .unwrap();
        assert_eq!(record.model_id, "claude-3-opus");
        assert_eq!(record.input_usd_per_million, 15.0);
        assert_eq!(record.output_usd_per_million, 75.0);
    }

    #[test]
    fn test_id_key_fallbacks_and_trimming() {
        let record = normalize_pricing_row(&json!({
            "name": "  mistral-large  ",
            "input_cost": 2.0,
        }))
        .unwrap();
        assert_eq!(record.model_id, "mistral-large");

        // non-string candidates are skipped, blank ones too
        let record = normalize_pricing_row(&json!({
            "model_id": 42,
            "id": "   ",
            "model": "gpt-4o",
            "input_cost": 2.0,
        }))
        .unwrap();
        assert_eq!(record.model_id, "gpt-4o");
    }

    #[test]
    fn test_rejects_rows_without_id_or_prices() {
        assert!(normalize_pricing_row(&json!({"input_cost": 2.0})).is_none());
        assert!(normalize_pricing_row(&json!({"id": "m"})).is_none());
        assert!(normalize_pricing_row(&json!({"id": "m", "input_cost": "n/a"})).is_none());
        assert!(normalize_pricing_row(&json!("not an object")).is_none());
    }

    #[test]
    fn test_single_price_zeroes_the_other() {
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "output_cost_per_1000": 0.002,
        }))
        .unwrap();
        assert_eq!(record.input_usd_per_million, 0.0);
        assert_eq!(record.output_usd_per_million, 2.0);
    }

    #[test]
    fn test_context_window_extraction() {
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "input_cost": 1.0,
            "max_context": 200000,
        }))
        .unwrap();
        assert_eq!(record.context_window, Some(200000));

        // zero and string windows are not usable
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "input_cost": 1.0,
            "context_window": 0,
            "context_length": "128000",
        }))
        .unwrap();
        assert_eq!(record.context_window, None);
    }

    #[test]
    fn test_provider_fallback_chain() {
        let record = normalize_pricing_row(&json!({
            "id": "m",
            "input_cost": 1.0,
            "vendor": "anthropic",
        }))
        .unwrap();
        assert_eq!(record.provider, "anthropic");

        let record = normalize_pricing_row(&json!({"id": "m", "input_cost": 1.0})).unwrap();
        assert_eq!(record.provider, "");
    }

    #[test]
    fn test_cost_calculation() {
        // $2.50/M input, $10/M output
        let record = PricingRecord {
            model_id: "gpt-4o".to_string(),
            provider: "openai".to_string(),
            input_usd_per_million: 2.50,
            output_usd_per_million: 10.0,
            context_window: Some(128000),
        };
        let cost = record.cost(1000, 500);
        assert!((cost - 0.0075).abs() < 0.0001); // 0.0025 + 0.005 = 0.0075
    }

    #[test]
    fn test_batch_normalization_drops_bad_rows() {
        let rows = vec![
            json!({"id": "a", "input_cost": 1.0}),
            json!({"no_id": true}),
            json!({"id": "b", "output_cost": 2.0}),
            json!(null),
        ];
        let records = normalize_pricing_rows(&rows);
        let ids: Vec<&str> = records.iter().map(|r| r.model_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
