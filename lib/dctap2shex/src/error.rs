use oxdctap::{BuildError, ParseError, TapNodeType};
use oxshex::SchemaError;
use std::fmt;

/// An error raised while compiling TAP shapes into a ShEx schema.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompileError {
    /// A statement has both a value datatype and a value shape.
    #[error(
        "Property {property} of shape {shape} (line {line}) has both a value datatype and a value shape"
    )]
    ConflictingValueConstraint {
        shape: String,
        property: String,
        line: u64,
    },
    /// A value shape does not name any shape of the profile.
    #[error("Property {property} of shape {shape} references the undefined shape {reference}")]
    DanglingShapeReference {
        reference: String,
        shape: String,
        property: String,
    },
    /// Two shapes of the profile get the same identifier.
    #[error("Shape {id} (line {line}) is declared more than once")]
    DuplicateShape { id: String, line: u64 },
    /// A shape, property, datatype or value shape name is not a valid IRI or prefixed name.
    #[error("Invalid name '{name}': {message}")]
    InvalidName { name: String, message: String },
    /// A prefixed name uses a prefix that is not declared.
    #[error("The prefix '{prefix}' of '{name}' is not declared")]
    UndeclaredPrefix { name: String, prefix: String },
    /// The value node type contradicts the value datatype or value shape.
    #[error(
        "Property {property} of shape {shape} (line {line}) has the value node type {node_type} that contradicts its value constraint"
    )]
    IncompatibleNodeType {
        shape: String,
        property: String,
        node_type: TapNodeType,
        line: u64,
    },
    /// The compiled schema can not be written out.
    #[error(transparent)]
    InvalidSchema(#[from] SchemaError),
}

impl CompileError {
    pub(crate) fn invalid_name(name: &str, message: impl fmt::Display) -> Self {
        Self::InvalidName {
            name: name.to_owned(),
            message: message.to_string(),
        }
    }
}

/// A problem that did not stop a lenient compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompileWarning {
    /// A reference to an undefined shape has been replaced by a constraint accepting any value.
    DroppedShapeReference {
        reference: String,
        shape: String,
        property: String,
    },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DroppedShapeReference {
                reference,
                shape,
                property,
            } => write!(
                f,
                "Property {property} of shape {shape} references the undefined shape {reference}, any value is accepted instead"
            ),
        }
    }
}

/// A step of the [`Converter`](crate::Converter) pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Compilation of the TAP model into a schema.
    Compile,
    /// Serialization of the schema.
    Serialize,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compile => "compile the profile: no profile has been read",
            Self::Serialize => "serialize the schema: no schema has been compiled",
        })
    }
}

/// An error raised by the [`Converter`](crate::Converter) pipeline.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// A step has been requested before its input is available.
    #[error("Not able to {0}")]
    StageNotReady(Step),
    /// The profile text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The profile rows can not be grouped into shapes.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The profile can not be compiled into a schema.
    #[error(transparent)]
    Compile(#[from] CompileError),
}
