//! Schema: compiled, contiguous set of fields used to parse byte slices into [Token]s.

use crate::{
    compiled::CompiledField,
    errors::{CompileError, ReadError},
    field::FieldSpec,
    token::Token,
};

/// A compiled layout: fields in definition order covering `[0, total_len)` with no gaps
/// or overlaps. Use [Schema::compile] to build from [FieldSpec]s, then [Schema::parse]
/// to parse bytes.
#[derive(Debug, Clone)]
pub struct Schema {
    total_len: usize,
    /// Compiled fields in definition order.
    pub fields: Vec<CompiledField>,
}

impl Schema {
    /// Compiles a slice of [FieldSpec]s into a schema. Fails if any field is invalid or
    /// the fields do not tile the buffer from byte 0.
    pub fn compile(fields: &[FieldSpec]) -> Result<Self, CompileError> {
        if fields.is_empty() {
            return Err(CompileError::EmptyLayout);
        }

        let mut compiled_fields: Vec<CompiledField> = Vec::with_capacity(fields.len());
        let mut total_len = 0;

        for field in fields {
            let compiled_field: CompiledField = field.try_into()?;

            if compiled_field.offset != total_len {
                return Err(CompileError::NonContiguous {
                    title: compiled_field.title,
                    expected: total_len,
                    found: compiled_field.offset,
                });
            }

            total_len = match compiled_field.offset.checked_add(compiled_field.len) {
                Some(end) => end,
                None => {
                    return Err(CompileError::LayoutTooLong {
                        title: compiled_field.title,
                    });
                }
            };
            compiled_fields.push(compiled_field);
        }

        Ok(Self {
            fields: compiled_fields,
            total_len,
        })
    }

    /// Minimum number of bytes [Schema::parse] accepts.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Parses `data` according to this schema. Returns one [Token] per field, in
    /// definition order. Bytes past [Schema::total_len] are ignored.
    pub fn parse(&self, data: &[u8]) -> Result<Vec<Token>, ReadError> {
        if data.len() < self.total_len {
            return Err(ReadError::PacketTooShort {
                needed: self.total_len,
                actual: data.len(),
            });
        }

        log::trace!(
            "parsing {} fields from {} bytes",
            self.fields.len(),
            data.len()
        );

        self.fields.iter().map(|field| field.extract(data)).collect()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::LayoutDef> for Schema {
    type Error = CompileError;

    fn try_from(value: crate::serde::LayoutDef) -> Result<Self, Self::Error> {
        let fields: Vec<FieldSpec> = value.fields.into_iter().map(Into::into).collect();
        Schema::compile(&fields)
    }
}
