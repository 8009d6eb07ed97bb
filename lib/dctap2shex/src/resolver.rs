use oxshex::PrefixMap;

/// Expands the prefixed datatype names of a profile into full IRIs.
///
/// It is used by [`ShapeCompiler`](crate::ShapeCompiler) for `valueDatatype` values written as
/// `prefix:local`. Returning `None` keeps the prefixed name as written.
///
/// ```
/// use dctap2shex::PrefixResolver;
/// use oxshex::PrefixMap;
///
/// let prefixes = PrefixMap::new().with_prefix("xsd", "http://www.w3.org/2001/XMLSchema#")?;
/// assert_eq!(
///     prefixes.resolve("xsd", "date").as_deref(),
///     Some("http://www.w3.org/2001/XMLSchema#date")
/// );
/// assert_eq!(prefixes.resolve("foaf", "Person"), None);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub trait PrefixResolver {
    /// The full IRI of `prefix:local`, if known.
    fn resolve(&self, prefix: &str, local: &str) -> Option<String>;
}

/// A [`PrefixResolver`] that never expands anything.
///
/// This is the default resolver: datatypes stay opaque prefixed names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl PrefixResolver for PassThrough {
    #[inline]
    fn resolve(&self, _prefix: &str, _local: &str) -> Option<String> {
        None
    }
}

impl PrefixResolver for PrefixMap {
    #[inline]
    fn resolve(&self, prefix: &str, local: &str) -> Option<String> {
        self.expand(prefix, local)
    }
}
