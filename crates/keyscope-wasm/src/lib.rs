//! WASM bindings for the `keyscope` extended key inspector.
//!
//! From JavaScript you can:
//! - ask whether a string is a recognizable extended key ([`recognizes`]),
//! - split it into annotated fields ([`parse`]),
//! - or compile your own fixed byte layout from JSON ([`WasmLayout`]) and
//!   split raw byte buffers with it.
//!
//! ```text
//! // Pseudo TypeScript example
//! //
//! // if (recognizes(xpub)) {
//! //   for (const field of parse(xpub)) {
//! //     console.log(field.title, field.value, field.flavor_text);
//! //   }
//! // }
//! ```
//!
//! Errors are converted to `JsValue` strings using their `Display` form.

mod convert;

use keyscope::{Format, schema::Schema, xpub::XpubParser};
use wasm_bindgen::prelude::*;

/// True iff `input` is a base58 string that decodes to at least a full extended key.
#[wasm_bindgen]
pub fn recognizes(input: &str) -> bool {
    XpubParser.recognizes(input)
}

/// Splits an extended key into its seven fields.
///
/// Returns an array of `{ raw_hex, title, description, flavor_text, value }`.
#[wasm_bindgen]
pub fn parse(input: &str) -> Result<JsValue, JsValue> {
    let tokens = XpubParser.parse(input).map_err(convert::error_to_js)?;
    convert::tokens_to_js(tokens)
}

/// Name of the first format that recognizes `input`, if any.
#[wasm_bindgen]
pub fn detect(input: &str) -> Option<String> {
    Format::detect(input).map(|format| format.name().to_string())
}

/// A fixed byte layout compiled from JSON.
#[wasm_bindgen]
pub struct WasmLayout {
    schema: Schema,
}

#[wasm_bindgen]
impl WasmLayout {
    /// Compiles a layout. `layout_json` must deserialize into
    /// [`LayoutDef`](keyscope::serde::LayoutDef):
    /// `{ fields: [{ title, description?, offset, len, render? }] }`.
    #[wasm_bindgen(constructor)]
    pub fn new(layout_json: &str) -> Result<WasmLayout, JsValue> {
        let schema = convert::layout_from_json(layout_json).map_err(convert::error_to_js)?;
        Ok(WasmLayout { schema })
    }

    /// Bytes the layout covers.
    pub fn total_len(&self) -> usize {
        self.schema.total_len()
    }

    /// Splits `data` (e.g. a `Uint8Array`) along the layout.
    pub fn parse(&self, data: &[u8]) -> Result<JsValue, JsValue> {
        let tokens = self.schema.parse(data).map_err(convert::error_to_js)?;
        convert::tokens_to_js(tokens)
    }
}
