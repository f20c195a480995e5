use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::catalog::CatalogEntry;
use crate::classifier::Translator;
use crate::signal::FailureSignal;

const TRANSLATOR: Translator = Translator::new();

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Reflect, js_name = get, catch)]
    fn reflect_get(target: &JsValue, key: &JsValue) -> Result<JsValue, JsValue>;
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// Throwing getters and proxies read as absent.
fn string_property(target: &JsValue, key: &str) -> Option<String> {
    reflect_get(target, &JsValue::from_str(key)).ok()?.as_string()
}

fn signal_from_js(value: &JsValue) -> FailureSignal {
    if let Some(text) = value.as_string() {
        return FailureSignal::Text(text);
    }
    if !value.is_object() {
        return FailureSignal::Opaque;
    }
    match string_property(value, "message") {
        Some(message) => FailureSignal::Failure {
            message,
            stack: string_property(value, "stack"),
        },
        None => FailureSignal::Opaque,
    }
}

/// Translate any thrown value into a plain object:
/// `{ message, type, severity, actionableStep?, technicalDetails? }`.
#[wasm_bindgen]
pub fn translate_error(value: JsValue) -> JsValue {
    let normalized = TRANSLATOR.translate(signal_from_js(&value));
    to_js(&normalized)
}

/// Translate a JSON-encoded failure. Unparseable input is treated as opaque.
#[wasm_bindgen]
pub fn translate_error_json(json: &str) -> JsValue {
    let signal = match FailureSignal::from_json_str(json) {
        Ok(signal) => signal,
        Err(err) => {
            tracing::debug!(error = %err, "unparseable failure payload");
            FailureSignal::Opaque
        }
    };
    to_js(&TRANSLATOR.translate(signal))
}

/// Built-in catalog entries in lookup order.
#[wasm_bindgen]
pub fn get_error_catalog() -> JsValue {
    let entries: Vec<&CatalogEntry> = TRANSLATOR.catalog().entries().collect();
    to_js(&entries)
}
