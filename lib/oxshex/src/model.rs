//! ShEx schema model types.
//!
//! This module defines the ShEx abstract syntax produced from application profiles:
//! - [`Schema`] - Shape declarations indexed by identifier, with prefix declarations
//! - [`ShapeDecl`] - A named [`Shape`]
//! - [`TripleConstraint`] - Constraint on a predicate with a value and a cardinality
//! - [`ValueConstraint`] - What the values of a triple constraint must be
//! - [`Cardinality`] - How many times a predicate may occur

use crate::error::SchemaError;
use crate::iri::{IriRef, PrefixMap};
use rustc_hash::FxHashMap;
use std::fmt;

/// A shape declaration: a [`Shape`] with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDecl {
    /// Identifier of the shape.
    pub id: IriRef,

    /// Optional human readable label.
    pub label: Option<String>,

    /// The shape itself.
    pub shape: Shape,
}

impl ShapeDecl {
    /// Declares an empty shape.
    pub fn new(id: IriRef) -> Self {
        Self {
            id,
            label: None,
            shape: Shape::new(),
        }
    }

    /// Sets the label of the shape.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

/// Shape with triple constraints.
///
/// A node conforms to the shape if its outgoing triples match every triple constraint,
/// taking cardinalities into account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shape {
    /// Triple constraints that must be satisfied, in declaration order.
    pub triple_constraints: Vec<TripleConstraint>,
}

impl Shape {
    /// Creates a new empty shape.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple constraint to this shape.
    pub fn add_triple_constraint(&mut self, constraint: TripleConstraint) {
        self.triple_constraints.push(constraint);
    }

    /// Returns true if this shape has no constraints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triple_constraints.is_empty()
    }

    /// Names used by the triple constraints: predicates, datatypes and shape references.
    pub fn iri_refs(&self) -> impl Iterator<Item = &IriRef> {
        self.triple_constraints.iter().flat_map(|tc| {
            let value = match &tc.value {
                ValueConstraint::Datatype(iri) | ValueConstraint::ShapeReference(iri) => Some(iri),
                ValueConstraint::NodeKind(_) | ValueConstraint::Any => None,
            };
            std::iter::once(&tc.predicate).chain(value)
        })
    }

    /// Shape references used by the triple constraints.
    pub fn references(&self) -> impl Iterator<Item = (&TripleConstraint, &IriRef)> {
        self.triple_constraints
            .iter()
            .filter_map(|tc| tc.value.as_shape_reference().map(|r| (tc, r)))
    }
}

/// Constraint on a triple pattern.
///
/// Specifies a predicate and the constraint its values must satisfy,
/// along with the number of allowed occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleConstraint {
    /// Predicate of the constrained triples.
    pub predicate: IriRef,

    /// Constraint on the triple objects.
    pub value: ValueConstraint,

    /// Cardinality constraint.
    pub cardinality: Cardinality,

    /// Optional human readable label of the predicate.
    pub label: Option<String>,
}

impl TripleConstraint {
    /// Creates a new triple constraint on the given predicate, allowing any value exactly once.
    pub fn new(predicate: IriRef) -> Self {
        Self {
            predicate,
            value: ValueConstraint::Any,
            cardinality: Cardinality::default(),
            label: None,
        }
    }

    /// Sets the value constraint.
    #[must_use]
    pub fn with_value(mut self, value: ValueConstraint) -> Self {
        self.value = value;
        self
    }

    /// Sets the cardinality for this constraint.
    #[must_use]
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Sets the label of the predicate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// What the values of a triple constraint must be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueConstraint {
    /// Literals of the given datatype.
    Datatype(IriRef),
    /// Nodes conforming to the shape with the given identifier.
    ShapeReference(IriRef),
    /// Nodes of the given kind.
    NodeKind(NodeKind),
    /// Anything.
    Any,
}

impl ValueConstraint {
    /// Returns the referenced shape identifier if this is a shape reference.
    #[inline]
    pub fn as_shape_reference(&self) -> Option<&IriRef> {
        match self {
            Self::ShapeReference(id) => Some(id),
            Self::Datatype(_) | Self::NodeKind(_) | Self::Any => None,
        }
    }
}

/// Cardinality of a triple constraint.
///
/// [`One`](Self::One) and [`RequiredOne`](Self::RequiredOne) allow the same number of occurrences,
/// the latter also records that the property has been declared mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// Exactly one occurrence.
    #[default]
    One,
    /// Exactly one occurrence, declared mandatory.
    RequiredOne,
    /// Any number of occurrences (`*`).
    ZeroOrMore,
    /// At least one occurrence (`+`).
    OneOrMore,
}

impl Cardinality {
    /// Minimum number of occurrences.
    #[inline]
    pub const fn min(self) -> u32 {
        match self {
            Self::ZeroOrMore => 0,
            Self::One | Self::RequiredOne | Self::OneOrMore => 1,
        }
    }

    /// Maximum number of occurrences, `None` if unbounded.
    #[inline]
    pub const fn max(self) -> Option<u32> {
        match self {
            Self::One | Self::RequiredOne => Some(1),
            Self::ZeroOrMore | Self::OneOrMore => None,
        }
    }
}

impl fmt::Display for Cardinality {
    /// Writes the ShExC cardinality marker (nothing for exactly one).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One | Self::RequiredOne => Ok(()),
            Self::ZeroOrMore => f.write_str("*"),
            Self::OneOrMore => f.write_str("+"),
        }
    }
}

/// Node kind constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// IRI node.
    Iri,
    /// Blank node.
    BNode,
    /// Literal value.
    Literal,
    /// Non-literal (IRI or blank node).
    NonLiteral,
}

impl NodeKind {
    /// The ShExJ name of the node kind.
    #[inline]
    pub const fn json_name(self) -> &'static str {
        match self {
            Self::Iri => "iri",
            Self::BNode => "bnode",
            Self::Literal => "literal",
            Self::NonLiteral => "nonliteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri => write!(f, "IRI"),
            Self::BNode => write!(f, "BNODE"),
            Self::Literal => write!(f, "LITERAL"),
            Self::NonLiteral => write!(f, "NONLITERAL"),
        }
    }
}

/// Collection of shape declarations (shapes schema in ShEx terminology).
///
/// Shapes are kept in insertion order so that serializations are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Prefix declarations used to write the schema.
    prefixes: PrefixMap,

    /// Shape declarations in insertion order.
    shapes: Vec<ShapeDecl>,

    /// Position of each shape in `shapes`.
    index: FxHashMap<IriRef, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix declarations of the schema.
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: PrefixMap) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// The prefix declarations of the schema.
    #[inline]
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Adds a shape declaration.
    ///
    /// If a shape with the same identifier exists, it is replaced in place and returned.
    pub fn add_shape(&mut self, decl: ShapeDecl) -> Option<ShapeDecl> {
        if let Some(position) = self.index.get(&decl.id) {
            return Some(std::mem::replace(&mut self.shapes[*position], decl));
        }
        self.index.insert(decl.id.clone(), self.shapes.len());
        self.shapes.push(decl);
        None
    }

    /// Gets a shape declaration by identifier.
    pub fn get_shape(&self, id: &IriRef) -> Option<&ShapeDecl> {
        self.index.get(id).map(|position| &self.shapes[*position])
    }

    /// Returns true if a shape with this identifier is declared.
    pub fn contains_shape(&self, id: &IriRef) -> bool {
        self.index.contains_key(id)
    }

    /// Returns an iterator over all shape declarations, in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDecl> {
        self.shapes.iter()
    }

    /// Returns true if the schema has no shape.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the number of shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Shape references that do not resolve to a shape of this schema.
    ///
    /// References are only looked up, never followed, so cyclic schemas are fine.
    pub fn dangling_references(&self) -> impl Iterator<Item = DanglingReference<'_>> {
        self.shapes.iter().flat_map(move |decl| {
            decl.shape
                .references()
                .filter(move |(_, reference)| !self.contains_shape(reference))
                .map(move |(tc, reference)| DanglingReference {
                    shape: &decl.id,
                    predicate: &tc.predicate,
                    reference,
                })
        })
    }

    /// Validates that the schema can be written in any format.
    ///
    /// Every prefixed name must use a declared prefix and every shape reference must be defined.
    /// Returns an error for the first problem found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for decl in &self.shapes {
            for iri in std::iter::once(&decl.id).chain(decl.shape.iri_refs()) {
                if let Some((prefix, _)) = iri.as_prefixed() {
                    if self.prefixes.get(prefix).is_none() {
                        return Err(SchemaError::UndeclaredPrefix {
                            name: iri.to_string(),
                            prefix: prefix.to_owned(),
                        });
                    }
                }
            }
        }
        if let Some(dangling) = self.dangling_references().next() {
            return Err(SchemaError::UndefinedShapeRef {
                shape: dangling.shape.to_string(),
                predicate: dangling.predicate.to_string(),
                reference: dangling.reference.to_string(),
            });
        }
        Ok(())
    }
}

/// A shape reference without target, see [`Schema::dangling_references`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference<'a> {
    /// The shape containing the reference.
    pub shape: &'a IriRef,
    /// The predicate of the triple constraint containing the reference.
    pub predicate: &'a IriRef,
    /// The missing shape.
    pub reference: &'a IriRef,
}
