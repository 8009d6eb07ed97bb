//! Error types for ShEx schemas.

use oxiri::IriParseError;

/// Error returned when building an [`IriRef`](crate::IriRef) or a [`PrefixMap`](crate::PrefixMap) entry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IriRefError {
    /// Invalid absolute IRI.
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        iri: String,
        #[source]
        error: IriParseError,
    },

    /// Invalid prefix name.
    #[error("Invalid prefix name '{prefix}'")]
    InvalidPrefix { prefix: String },

    /// Invalid local part of a prefixed name.
    #[error("Invalid local name '{local}'")]
    InvalidLocalName { local: String },
}

/// Error returned when a schema can not be written out.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A prefixed name uses a prefix that is not declared in the schema.
    #[error("The prefix '{prefix}' of {name} is not declared")]
    UndeclaredPrefix { name: String, prefix: String },

    /// A triple constraint references a shape that is not declared in the schema.
    #[error("Undefined shape reference {reference} in shape {shape} for predicate {predicate}")]
    UndefinedShapeRef {
        shape: String,
        predicate: String,
        reference: String,
    },
}

impl IriRefError {
    pub(crate) fn invalid_iri(iri: impl Into<String>, error: IriParseError) -> Self {
        Self::InvalidIri {
            iri: iri.into(),
            error,
        }
    }

    pub(crate) fn invalid_prefix(prefix: impl Into<String>) -> Self {
        Self::InvalidPrefix {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn invalid_local_name(local: impl Into<String>) -> Self {
        Self::InvalidLocalName {
            local: local.into(),
        }
    }
}
