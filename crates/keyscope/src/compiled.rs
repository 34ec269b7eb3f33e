use crate::{
    bytes,
    errors::{CompileError, ReadError},
    field::FieldSpec,
    render::Render,
    token::Token,
};

/// A validated [FieldSpec], ready to extract a [Token] from a byte slice.
#[derive(Debug, Clone)]
pub struct CompiledField {
    pub title: String,
    pub description: String,
    pub offset: usize,
    pub len: usize,
    pub render: Render,
}

impl TryFrom<&FieldSpec> for CompiledField {
    type Error = CompileError;

    fn try_from(value: &FieldSpec) -> Result<Self, Self::Error> {
        if value.len == 0 {
            return Err(CompileError::EmptyField(value.title.to_string()));
        } else if value.render.is_numeric() && value.len > 8 {
            return Err(CompileError::NumericFieldTooWide {
                title: value.title.to_string(),
                len: value.len,
            });
        }

        Ok(CompiledField {
            title: value.title.to_string(),
            description: value.description.to_string(),
            offset: value.offset,
            len: value.len,
            render: value.render,
        })
    }
}

impl CompiledField {
    pub fn extract(&self, data: &[u8]) -> Result<Token, ReadError> {
        let raw = bytes::slice_at(data, self.offset, self.len)?;

        Ok(Token {
            raw_hex: bytes::to_hex(raw),
            title: self.title.clone(),
            description: self.description.clone(),
            value: self.render.apply(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_field() {
        let data = [0x04, 0x88, 0xb2, 0x1e, 0x03];

        let depth = FieldSpec::new("Depth", "How deep.", 4, 1, Render::DecimalWithHex);
        let compiled = CompiledField::try_from(&depth).unwrap();
        let token = compiled.extract(&data).unwrap();

        assert_eq!(token.raw_hex, "03");
        assert_eq!(token.title, "Depth");
        assert_eq!(token.value, "3 (0x03)");
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let data = [0x00; 4];

        let spec = FieldSpec::new("Tail", "", 2, 4, Render::Hex);
        let compiled = CompiledField::try_from(&spec).unwrap();
        assert_eq!(compiled.extract(&data).unwrap_err(), ReadError::OutOfBounds);
    }

    #[test]
    fn test_zero_length_field() {
        let spec = FieldSpec::new("Nothing", "", 0, 0, Render::Hex);
        assert_eq!(
            CompiledField::try_from(&spec).unwrap_err(),
            CompileError::EmptyField("Nothing".to_string())
        );
    }

    #[test]
    fn test_numeric_field_too_wide() {
        let spec = FieldSpec::new("Chaincode", "", 0, 32, Render::Decimal);
        assert_eq!(
            CompiledField::try_from(&spec).unwrap_err(),
            CompileError::NumericFieldTooWide {
                title: "Chaincode".to_string(),
                len: 32,
            }
        );
    }

    #[test]
    fn test_wide_hex_field_is_fine() {
        let spec = FieldSpec::new("Chaincode", "", 0, 32, Render::Hex);
        assert!(CompiledField::try_from(&spec).is_ok());
    }
}
