use crate::format::ShExFormat;
use crate::model::Schema;
use std::io::{self, Write};

/// Configuration of a ShEx serialization.
///
/// It is a plain value: the same formatter can be used to write any number of schemas.
///
/// ```
/// use oxshex::{IriRef, Schema, ShapeDecl, ShExFormat, ShExFormatter};
///
/// let mut schema = Schema::new();
/// schema.add_shape(ShapeDecl::new(IriRef::iri("http://example.com/Empty")?));
/// assert_eq!(
///     ShExFormatter::new().serialize(&schema),
///     "<http://example.com/Empty> {}\n"
/// );
/// assert_eq!(
///     ShExFormatter::new()
///         .with_format(ShExFormat::ShExJ)
///         .with_indent(0)
///         .serialize(&schema),
///     r#"{"@context":"http://www.w3.org/ns/shex.jsonld","type":"Schema","shapes":[{"type":"ShapeDecl","id":"http://example.com/Empty","shapeExpr":{"type":"Shape"}}]}"#
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ShExFormatter {
    format: ShExFormat,
    indent: usize,
    labels_as_comments: bool,
    styled: bool,
}

impl ShExFormatter {
    /// Builds a formatter writing ShExC, indenting with two spaces, without comments nor colors.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output syntax.
    #[inline]
    pub fn with_format(mut self, format: ShExFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the number of spaces of each indentation level.
    #[inline]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Writes shape and property labels as comments before their declaration.
    ///
    /// Only ShExC supports comments.
    #[inline]
    pub fn with_labels_as_comments(mut self) -> Self {
        self.labels_as_comments = true;
        self
    }

    /// Highlights the output with ANSI color sequences.
    ///
    /// Only ShExC output is highlighted.
    #[inline]
    pub fn with_styles(mut self) -> Self {
        self.styled = true;
        self
    }

    /// The output syntax.
    #[inline]
    pub fn format(&self) -> ShExFormat {
        self.format
    }

    /// The number of spaces of each indentation level.
    #[inline]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// If labels are written as comments.
    #[inline]
    pub fn labels_as_comments(&self) -> bool {
        self.labels_as_comments
    }

    /// If the output is highlighted.
    #[inline]
    pub fn styled(&self) -> bool {
        self.styled
    }

    /// Writes a schema into a string.
    pub fn serialize(&self, schema: &Schema) -> String {
        (self.format.renderer())(schema, self)
    }

    /// Writes a schema into a [`Write`] implementation.
    pub fn serialize_to_write(&self, schema: &Schema, mut write: impl Write) -> io::Result<()> {
        write.write_all(self.serialize(schema).as_bytes())?;
        write.flush()
    }
}

impl Default for ShExFormatter {
    #[inline]
    fn default() -> Self {
        Self {
            format: ShExFormat::default(),
            indent: 2,
            labels_as_comments: false,
            styled: false,
        }
    }
}
