//! Error types for DCTAP reading and shape grouping.

use std::io;

/// Error returned by [`TapReader`](crate::TapReader) when a profile can't be read.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input has no header line at all.
    #[error("The DCTAP profile is empty: a header line is required")]
    MissingHeader,

    /// The header line does not declare a required column.
    #[error("The DCTAP header does not declare the required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A non blank row has no property.
    #[error("Row at line {line} has no propertyId")]
    MissingProperty { line: u64 },

    /// A boolean column holds something else than `true` or `false`.
    #[error("Invalid boolean '{value}' in column {column} at line {line}: expected true or false")]
    InvalidBoolean {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The `valueNodeType` column holds an unknown node type.
    #[error(
        "Invalid node type '{value}' at line {line}: expected IRI, BNODE, LITERAL or NONLITERAL"
    )]
    InvalidNodeType { line: u64, value: String },

    /// The text is not well-formed delimited text.
    #[error("Malformed DCTAP table: {error}")]
    Csv { line: Option<u64>, error: csv::Error },

    /// I/O error while reading the profile.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ParseError {
    pub(crate) fn invalid_boolean(line: u64, column: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            line,
            column,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_node_type(line: u64, value: impl Into<String>) -> Self {
        Self::InvalidNodeType {
            line,
            value: value.into(),
        }
    }

    /// The 1-based line of the input the error refers to, if any.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::MissingProperty { line }
            | Self::InvalidBoolean { line, .. }
            | Self::InvalidNodeType { line, .. } => Some(*line),
            Self::Csv { line, .. } => *line,
            Self::MissingHeader | Self::MissingColumn { .. } | Self::Io(_) => None,
        }
    }
}

impl From<csv::Error> for ParseError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return Self::Io(error.into());
        }
        Self::Csv {
            line: error.position().map(csv::Position::line),
            error,
        }
    }
}

/// Error returned by [`build`](crate::build) when rows can't be grouped into shapes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A row without `shapeId` appears before any shape has been opened.
    #[error(
        "Row {position} (line {line}) has no shapeId and there is no previous shape to continue"
    )]
    OrphanRow { position: usize, line: u64 },
}
