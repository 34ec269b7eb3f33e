//! Definition of the byte fields used to build a [crate::schema::Schema].

use std::borrow::Cow;

use crate::render::Render;

/// A single titled field in a layout: a contiguous byte range and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Short label, e.g. `Depth`.
    pub title: Cow<'static, str>,
    /// Explanatory text. The first line is the summary, further lines are the highlight.
    pub description: Cow<'static, str>,
    /// Byte offset where the field starts.
    pub offset: usize,
    /// Number of bytes the field covers.
    pub len: usize,
    /// How the bytes become the display value.
    pub render: Render,
}

impl FieldSpec {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        offset: usize,
        len: usize,
        render: Render,
    ) -> Self {
        FieldSpec {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
            offset,
            len,
            render,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for FieldSpec {
    fn from(value: crate::serde::FieldDef) -> Self {
        FieldSpec {
            title: Cow::Owned(value.title),
            description: Cow::Owned(value.description),
            offset: value.offset,
            len: value.len,
            render: value.render.into(),
        }
    }
}
