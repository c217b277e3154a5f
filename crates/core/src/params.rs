//! Typed extraction from JSON parameter objects.
//!
//! Recipes and the CLI carry free-form `serde_json::Value` parameter maps.
//! These helpers pull a typed value by key and fall back to a default when
//! the key is missing or the wrong type; they never fail.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, or `default` if missing/mistyped.
/// JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, or `default` if missing/mistyped.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}
