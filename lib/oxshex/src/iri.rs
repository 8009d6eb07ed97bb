//! IRI references and prefix declarations.

use crate::error::IriRefError;
use oxiri::Iri;
use std::fmt;

/// A reference to an IRI, either written in full or as a prefixed name (`xsd:string`).
///
/// Prefixed names are kept as written: they are only expanded when a serializer needs a full IRI
/// and the prefix is declared in the schema [`PrefixMap`].
///
/// ```
/// use oxshex::IriRef;
///
/// let full = IriRef::iri("http://schema.org/name")?;
/// assert_eq!(full.to_string(), "<http://schema.org/name>");
/// let prefixed = IriRef::prefixed("xsd", "string")?;
/// assert_eq!(prefixed.to_string(), "xsd:string");
/// assert_eq!(IriRef::local("Person")?.to_string(), ":Person");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IriRef {
    inner: IriRefKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum IriRefKind {
    Iri(String),
    Prefixed { prefix: String, local: String },
}

impl IriRef {
    /// Builds a reference from an absolute IRI.
    pub fn iri(iri: impl Into<String>) -> Result<Self, IriRefError> {
        let iri = iri.into();
        match Iri::parse(iri.as_str()) {
            Ok(_) => Ok(Self {
                inner: IriRefKind::Iri(iri),
            }),
            Err(error) => Err(IriRefError::invalid_iri(iri, error)),
        }
    }

    /// Builds a prefixed name `prefix:local`.
    pub fn prefixed(prefix: impl Into<String>, local: impl Into<String>) -> Result<Self, IriRefError> {
        let prefix = prefix.into();
        let local = local.into();
        if !is_valid_prefix(&prefix) {
            return Err(IriRefError::invalid_prefix(prefix));
        }
        if !is_valid_local_name(&local) {
            return Err(IriRefError::invalid_local_name(local));
        }
        Ok(Self {
            inner: IriRefKind::Prefixed { prefix, local },
        })
    }

    /// Builds a name in the default (empty) prefix, written `:local`.
    pub fn local(local: impl Into<String>) -> Result<Self, IriRefError> {
        Self::prefixed("", local)
    }

    /// The IRI if the reference is written in full.
    #[inline]
    pub fn as_iri(&self) -> Option<&str> {
        match &self.inner {
            IriRefKind::Iri(iri) => Some(iri),
            IriRefKind::Prefixed { .. } => None,
        }
    }

    /// The prefix and local name if the reference is a prefixed name.
    #[inline]
    pub fn as_prefixed(&self) -> Option<(&str, &str)> {
        match &self.inner {
            IriRefKind::Iri(_) => None,
            IriRefKind::Prefixed { prefix, local } => Some((prefix, local)),
        }
    }

    /// The full IRI, expanding prefixed names with the given prefix declarations.
    ///
    /// Returns `None` for a prefixed name whose prefix is not declared.
    pub fn expand(&self, prefixes: &PrefixMap) -> Option<String> {
        match &self.inner {
            IriRefKind::Iri(iri) => Some(iri.clone()),
            IriRefKind::Prefixed { prefix, local } => prefixes.expand(prefix, local),
        }
    }
}

impl fmt::Display for IriRef {
    /// Writes the reference in the ShExC and Turtle syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            IriRefKind::Iri(iri) => write!(f, "<{iri}>"),
            IriRefKind::Prefixed { prefix, local } => write!(f, "{prefix}:{local}"),
        }
    }
}

/// Ordered prefix declarations.
///
/// Declarations keep their insertion order, redeclaring a prefix replaces its IRI in place.
///
/// ```
/// use oxshex::PrefixMap;
///
/// let prefixes = PrefixMap::new()
///     .with_prefix("", "http://example.org/")?
///     .with_prefix("xsd", "http://www.w3.org/2001/XMLSchema#")?;
/// assert_eq!(
///     prefixes.expand("xsd", "date").as_deref(),
///     Some("http://www.w3.org/2001/XMLSchema#date")
/// );
/// assert_eq!(prefixes.expand("foaf", "name"), None);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    prefixes: Vec<(String, Iri<String>)>,
}

impl PrefixMap {
    /// Builds an empty prefix map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a prefix.
    pub fn with_prefix(
        mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Result<Self, IriRefError> {
        self.insert(prefix_name, prefix_iri)?;
        Ok(self)
    }

    /// Declares a prefix without validating it.
    ///
    /// It is the caller's responsibility to ensure that `prefix_name` is a valid prefix name
    /// and `prefix_iri` a valid IRI.
    ///
    /// [`PrefixMap::with_prefix()`] is a safe version of this method and should be used for untrusted data.
    #[inline]
    pub fn with_prefix_unchecked(
        mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Self {
        self.set(prefix_name.into(), Iri::parse_unchecked(prefix_iri.into()));
        self
    }

    /// Declares a prefix.
    pub fn insert(
        &mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Result<(), IriRefError> {
        let prefix_name = prefix_name.into();
        if !is_valid_prefix(&prefix_name) {
            return Err(IriRefError::invalid_prefix(prefix_name));
        }
        let prefix_iri = prefix_iri.into();
        let prefix_iri = match Iri::parse(prefix_iri.clone()) {
            Ok(iri) => iri,
            Err(error) => return Err(IriRefError::invalid_iri(prefix_iri, error)),
        };
        self.set(prefix_name, prefix_iri);
        Ok(())
    }

    fn set(&mut self, prefix_name: String, prefix_iri: Iri<String>) {
        if let Some((_, iri)) = self.prefixes.iter_mut().find(|(name, _)| *name == prefix_name) {
            *iri = prefix_iri;
        } else {
            self.prefixes.push((prefix_name, prefix_iri));
        }
    }

    /// The IRI bound to a prefix.
    pub fn get(&self, prefix_name: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(name, _)| name == prefix_name)
            .map(|(_, iri)| iri.as_str())
    }

    /// Expands `prefix:local` into a full IRI if the prefix is declared.
    pub fn expand(&self, prefix_name: &str, local: &str) -> Option<String> {
        self.get(prefix_name).map(|iri| format!("{iri}{local}"))
    }

    /// The declarations, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(name, iri)| (name.as_str(), iri.as_str()))
    }

    /// The number of declared prefixes.
    #[inline]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Returns true if no prefix is declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Simplified `PN_PREFIX` production of the ShExC and Turtle grammars.
fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.is_alphabetic()
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !prefix.ends_with('.')
}

/// Simplified `PN_LOCAL` production of the ShExC and Turtle grammars, without escapes.
fn is_valid_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    (first.is_alphanumeric() || matches!(first, '_' | ':'))
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
        && !local.ends_with('.')
}
