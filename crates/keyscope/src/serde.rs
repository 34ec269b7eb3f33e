//! JSON-deserializable layout description.
//!
//! These types describe the *shape* of a fixed binary layout. They are intended to be
//! read from JSON (for example a layout file shipped with your application) and then
//! compiled into a [crate::schema::Schema].

use serde::{Deserialize, Serialize};

/// How a field's bytes are rendered.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub enum RenderDef {
    /// Unsigned big-endian decimal.
    Decimal,
    /// Decimal followed by the hex bytes in parentheses.
    DecimalWithHex,
    #[default]
    /// `0x`-prefixed hex.
    Hex,
}

impl From<RenderDef> for crate::render::Render {
    fn from(value: RenderDef) -> Self {
        match value {
            RenderDef::Decimal => crate::render::Render::Decimal,
            RenderDef::DecimalWithHex => crate::render::Render::DecimalWithHex,
            RenderDef::Hex => crate::render::Render::Hex,
        }
    }
}

/// Top-level layout definition: fields in byte order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutDef {
    pub fields: Vec<FieldDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    pub title: String,
    /// Summary line, optionally followed by a newline and a highlight sentence.
    #[serde(default)]
    pub description: String,
    /// Byte offset of the field from the start of the payload.
    pub offset: usize,
    /// Length of the field in bytes.
    pub len: usize,
    /// Defaults to hex.
    #[serde(default)]
    pub render: RenderDef,
}

#[cfg(test)]
mod tests {
    use crate::{errors::CompileError, schema::Schema};

    use super::*;

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "fields": [
                { "title": "Tag", "offset": 0, "len": 1, "render": "Decimal" },
                { "title": "Body", "description": "Payload.\nOpaque.", "offset": 1, "len": 3 }
            ]
        }"#;

        let def: LayoutDef = serde_json::from_str(json).unwrap();
        let schema = Schema::try_from(def).unwrap();
        let tokens = schema.parse(&[0x07, 0xaa, 0xbb, 0xcc]).unwrap();

        assert_eq!(tokens[0].value, "7");
        assert_eq!(tokens[1].value, "0xaabbcc");
        assert_eq!(tokens[1].flavor_text(), "Opaque.");
    }

    #[test]
    fn test_layout_from_json_with_gap() {
        let json = r#"{ "fields": [ { "title": "Body", "offset": 2, "len": 3 } ] }"#;

        let def: LayoutDef = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Schema::try_from(def),
            Err(CompileError::NonContiguous { .. })
        ));
    }

    #[test]
    fn test_token_serializes() {
        let token = crate::token::Token {
            raw_hex: "00".to_string(),
            title: "Depth".to_string(),
            description: "Depth.".to_string(),
            value: "0 (0x00)".to_string(),
        };

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["raw_hex"], "00");
        assert_eq!(json["value"], "0 (0x00)");
    }
}
