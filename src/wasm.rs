use wasm_bindgen::prelude::*;

use crate::events;
use crate::trace::serialize_error;
use crate::types::ErrorSnapshot;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_snapshot(snapshot: JsValue) -> Result<ErrorSnapshot, JsValue> {
    serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("invalid error snapshot: {e}")))
}

/// Serializes a captured error chain into its wire trace
/// (`{ culprit, frames }`).
#[wasm_bindgen]
pub fn serialize_error_snapshot(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot = parse_snapshot(snapshot)?;
    to_js(&serialize_error(&snapshot))
}

/// Builds a full exception event payload from a captured error chain.
#[wasm_bindgen]
pub fn exception_event(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot = parse_snapshot(snapshot)?;
    let payload = events::exception::exception(&snapshot)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&payload)
}

/// Builds a message event payload. `params` may be null or undefined.
#[wasm_bindgen]
pub fn message_event(text: &str, params: JsValue) -> Result<JsValue, JsValue> {
    let params: Vec<serde_json::Value> = if params.is_null() || params.is_undefined() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("invalid params: {e}")))?
    };
    to_js(&events::message::message(text, &params))
}

/// Builds a query event payload.
#[wasm_bindgen]
pub fn query_event(query: &str, engine: &str) -> Result<JsValue, JsValue> {
    to_js(&events::query::query(query, engine))
}
