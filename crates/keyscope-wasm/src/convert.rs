use std::fmt::Display;

use keyscope::{Token, schema::Schema, serde::LayoutDef};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Token shape handed to JavaScript, with the highlight sentence split out.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsToken {
    pub raw_hex: String,
    pub title: String,
    pub description: String,
    pub flavor_text: String,
    pub value: String,
}

impl From<Token> for JsToken {
    fn from(token: Token) -> Self {
        JsToken {
            flavor_text: token.flavor_text().to_string(),
            raw_hex: token.raw_hex,
            title: token.title,
            description: token.description,
            value: token.value,
        }
    }
}

/// Deserializes and compiles a layout. Errors are rendered with `Display`.
pub fn layout_from_json(layout_json: &str) -> Result<Schema, String> {
    let def: LayoutDef = serde_json::from_str(layout_json).map_err(|e| e.to_string())?;
    Schema::try_from(def).map_err(|e| e.to_string())
}

pub fn js_tokens(tokens: Vec<Token>) -> Vec<JsToken> {
    tokens.into_iter().map(JsToken::from).collect()
}

pub fn tokens_to_js(tokens: Vec<Token>) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&js_tokens(tokens))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn error_to_js<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
