//! ShEx (Shape Expressions) schema model and serializers.
//!
//! This crate provides the subset of the [ShEx](https://shex.io/) abstract syntax needed to describe
//! application profiles, and writers for the two standard ShEx syntaxes.
//!
//! # Core Concepts
//!
//! - **Schema**: Shape declarations with prefix declarations ([`Schema`])
//! - **Shape**: Triple constraints on the outgoing triples of a node ([`Shape`], [`TripleConstraint`])
//! - **Serialization**: [ShExC](https://shex.io/shex-semantics/#shexc) or [ShExJ](https://shex.io/shex-semantics/#shexj) output ([`ShExFormatter`])
//!
//! # Quick Start
//!
//! ```
//! use oxshex::{
//!     Cardinality, IriRef, PrefixMap, Schema, Shape, ShapeDecl, ShExFormatter, TripleConstraint,
//!     ValueConstraint,
//! };
//!
//! let mut shape = Shape::new();
//! shape.add_triple_constraint(
//!     TripleConstraint::new(IriRef::local("name")?)
//!         .with_value(ValueConstraint::Datatype(IriRef::prefixed("xsd", "string")?))
//!         .with_cardinality(Cardinality::OneOrMore),
//! );
//! let mut schema = Schema::new().with_prefixes(
//!     PrefixMap::new()
//!         .with_prefix("", "http://example.org/")?
//!         .with_prefix("xsd", "http://www.w3.org/2001/XMLSchema#")?,
//! );
//! schema.add_shape(ShapeDecl::new(IriRef::local("Person")?).with_shape(shape));
//!
//! assert_eq!(
//!     ShExFormatter::new().serialize(&schema),
//!     "PREFIX : <http://example.org/>\nPREFIX xsd: <http://www.w3.org/2001/XMLSchema#>\n\n:Person {\n  :name xsd:string +\n}\n"
//! );
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod compact;
mod error;
mod format;
mod formatter;
mod iri;
mod json;
mod model;
mod style;


pub use error::{IriRefError, SchemaError};
pub use format::ShExFormat;
pub use formatter::ShExFormatter;
pub use iri::{IriRef, PrefixMap};
pub use model::{
    Cardinality, DanglingReference, NodeKind, Schema, Shape, ShapeDecl, TripleConstraint,
    ValueConstraint,
};
