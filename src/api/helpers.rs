//! Shared helpers for WASM API operations
//!
//! Serialization to and from `JsValue`, settings decoding and error
//! conversion. Logging goes through the `log` facade, which the start hook
//! routes to the browser console.

use crate::settings::LabelSettings;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Settings from an optional JS object; `undefined`/`null` mean defaults
pub fn settings_from_js(value: JsValue) -> Result<LabelSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(LabelSettings::default());
    }
    deserialize(value, "Invalid label settings")
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error message and convert it to a JsValue
pub fn js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
