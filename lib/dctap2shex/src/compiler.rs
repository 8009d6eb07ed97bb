use crate::error::{CompileError, CompileWarning};
use crate::resolver::{PassThrough, PrefixResolver};
use oxdctap::{TapNodeType, TapShape, TapStatement};
use oxshex::{
    Cardinality, IriRef, IriRefError, NodeKind, PrefixMap, Schema, Shape, ShapeDecl,
    TripleConstraint, ValueConstraint,
};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Compiles [`TapShape`]s into a ShEx [`Schema`].
///
/// Each shape becomes a [`ShapeDecl`] and each of its statements a [`TripleConstraint`],
/// in the same order.
/// Names are read as full IRIs if they are written between `<` and `>` or contain `://`,
/// as prefixed names if they contain `:` and as names in the default prefix otherwise.
/// Prefixed names must use a declared prefix, and two names expanding to the same IRI
/// identify the same shape.
///
/// ```
/// use dctap2shex::ShapeCompiler;
/// use oxdctap::{build, TapReader};
/// use oxshex::ShExFormatter;
///
/// let shapes = build(TapReader::new().parse_str(
///     "shapeId,propertyId,Repeatable,valueShape\nPerson,knows,true,Person",
/// )?)?;
/// let schema = ShapeCompiler::new()
///     .without_prefixes()
///     .with_prefix("", "http://example.com/")?
///     .compile(&shapes)?;
/// assert_eq!(
///     ShExFormatter::new().serialize(&schema),
///     "PREFIX : <http://example.com/>\n\n:Person {\n  :knows @:Person *\n}\n"
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
#[must_use]
pub struct ShapeCompiler {
    prefixes: PrefixMap,
    resolver: Arc<dyn PrefixResolver + Send + Sync>,
    lenient: bool,
}

impl ShapeCompiler {
    /// Builds a strict compiler declaring the default prefix as `http://example.org/`
    /// and `xsd` as the XML Schema namespace, leaving datatypes as written.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a prefix in the compiled schemas.
    ///
    /// ```
    /// use dctap2shex::ShapeCompiler;
    ///
    /// let compiler = ShapeCompiler::new().with_prefix("foaf", "http://xmlns.com/foaf/0.1/")?;
    /// assert_eq!(compiler.prefixes().len(), 3);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn with_prefix(
        mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Result<Self, IriRefError> {
        self.prefixes.insert(prefix_name, prefix_iri)?;
        Ok(self)
    }

    /// Removes all prefix declarations, including the default ones.
    #[inline]
    pub fn without_prefixes(mut self) -> Self {
        self.prefixes = PrefixMap::new();
        self
    }

    /// Sets the resolver used to expand prefixed datatype names.
    ///
    /// ```
    /// use dctap2shex::ShapeCompiler;
    /// use oxdctap::{build, TapReader};
    /// use oxshex::{IriRef, ValueConstraint};
    ///
    /// let compiler = ShapeCompiler::new();
    /// let compiler = compiler.clone().with_prefix_resolver(compiler.prefixes().clone());
    /// let shapes = build(TapReader::new().parse_str(
    ///     "shapeId,propertyId,valueDatatype\nPerson,birthdate,xsd:date",
    /// )?)?;
    /// let schema = compiler.compile(&shapes)?;
    /// let person = schema.get_shape(&IriRef::local("Person")?).ok_or("no shape")?;
    /// assert_eq!(
    ///     person.shape.triple_constraints[0].value,
    ///     ValueConstraint::Datatype(IriRef::iri("http://www.w3.org/2001/XMLSchema#date")?)
    /// );
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    #[inline]
    pub fn with_prefix_resolver(
        mut self,
        resolver: impl PrefixResolver + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Replaces references to undefined shapes by constraints accepting any value
    /// instead of failing.
    ///
    /// The dropped references are reported by [`compile_with_warnings`](Self::compile_with_warnings).
    #[inline]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// The prefixes declared in the compiled schemas.
    #[inline]
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Compiles shapes into a schema.
    pub fn compile(&self, shapes: &[TapShape]) -> Result<Schema, CompileError> {
        Ok(self.compile_with_warnings(shapes)?.0)
    }

    /// Compiles shapes into a schema, also returning the problems a lenient compilation got past.
    pub fn compile_with_warnings(
        &self,
        shapes: &[TapShape],
    ) -> Result<(Schema, Vec<CompileWarning>), CompileError> {
        // All identifiers are known before any reference is looked up, so forward and cyclic
        // references resolve without following them.
        let mut ids = FxHashMap::default();
        let mut shape_ids = Vec::with_capacity(shapes.len());
        for shape in shapes {
            let id = self.declared_name(shape.id())?;
            if ids.insert(self.identity(&id), id.clone()).is_some() {
                return Err(CompileError::DuplicateShape {
                    id: shape.id().to_owned(),
                    line: shape.line(),
                });
            }
            shape_ids.push(id);
        }

        let mut context = ShapeContext {
            compiler: self,
            ids: &ids,
            warnings: Vec::new(),
        };
        let mut schema = Schema::new().with_prefixes(self.prefixes.clone());
        let mut constraints = 0;
        for (shape, id) in shapes.iter().zip(shape_ids) {
            let decl = context.compile_shape(shape, id)?;
            constraints += decl.shape.triple_constraints.len();
            schema.add_shape(decl);
        }
        schema.validate()?;
        debug!(
            shapes = schema.len(),
            constraints,
            warnings = context.warnings.len(),
            "compiled ShEx schema"
        );
        Ok((schema, context.warnings))
    }

    /// Parses a name of the profile, rejecting prefixed names whose prefix is not declared.
    fn declared_name(&self, name: &str) -> Result<IriRef, CompileError> {
        let iri = parse_name(name)?;
        self.check_declared(name, iri)
    }

    fn check_declared(&self, name: &str, iri: IriRef) -> Result<IriRef, CompileError> {
        if let Some((prefix, _)) = iri.as_prefixed() {
            if self.prefixes.get(prefix).is_none() {
                return Err(CompileError::UndeclaredPrefix {
                    name: name.to_owned(),
                    prefix: prefix.to_owned(),
                });
            }
        }
        Ok(iri)
    }

    /// The IRI a shape name stands for.
    fn identity(&self, id: &IriRef) -> String {
        id.expand(&self.prefixes).unwrap_or_else(|| id.to_string())
    }

    fn resolve_datatype(&self, name: &str) -> Result<IriRef, CompileError> {
        let datatype = parse_name(name)?;
        if let Some((prefix, local)) = datatype.as_prefixed() {
            if let Some(iri) = self.resolver.resolve(prefix, local) {
                return IriRef::iri(iri).map_err(|e| CompileError::invalid_name(name, e));
            }
        }
        self.check_declared(name, datatype)
    }
}

impl Default for ShapeCompiler {
    fn default() -> Self {
        Self {
            prefixes: PrefixMap::new()
                .with_prefix_unchecked("", "http://example.org/")
                .with_prefix_unchecked("xsd", "http://www.w3.org/2001/XMLSchema#"),
            resolver: Arc::new(PassThrough),
            lenient: false,
        }
    }
}

impl fmt::Debug for ShapeCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCompiler")
            .field("prefixes", &self.prefixes)
            .field("lenient", &self.lenient)
            .finish_non_exhaustive()
    }
}

/// State of a single compilation.
struct ShapeContext<'a> {
    compiler: &'a ShapeCompiler,
    /// Declared shape identifiers, by the IRI they stand for.
    ids: &'a FxHashMap<String, IriRef>,
    warnings: Vec<CompileWarning>,
}

impl ShapeContext<'_> {
    fn compile_shape(&mut self, shape: &TapShape, id: IriRef) -> Result<ShapeDecl, CompileError> {
        let mut compiled = Shape::new();
        for statement in shape.statements() {
            let mut constraint =
                TripleConstraint::new(self.compiler.declared_name(&statement.property_id)?)
                .with_value(self.compile_value(shape, statement)?)
                .with_cardinality(cardinality(statement.mandatory, statement.repeatable));
            if let Some(label) = &statement.property_label {
                constraint = constraint.with_label(label.clone());
            }
            compiled.add_triple_constraint(constraint);
        }
        let mut decl = ShapeDecl::new(id).with_shape(compiled);
        if let Some(label) = shape.label() {
            decl = decl.with_label(label);
        }
        Ok(decl)
    }

    fn compile_value(
        &mut self,
        shape: &TapShape,
        statement: &TapStatement,
    ) -> Result<ValueConstraint, CompileError> {
        let node_type = statement.value_node_type;
        match (&statement.value_datatype, &statement.value_shape) {
            (Some(_), Some(_)) => Err(CompileError::ConflictingValueConstraint {
                shape: shape.id().to_owned(),
                property: statement.property_id.clone(),
                line: statement.line,
            }),
            (Some(datatype), None) => {
                if let Some(node_type) = node_type.filter(|t| *t != TapNodeType::Literal) {
                    return Err(incompatible_node_type(shape, statement, node_type));
                }
                Ok(ValueConstraint::Datatype(
                    self.compiler.resolve_datatype(datatype)?,
                ))
            }
            (None, Some(reference)) => {
                if node_type == Some(TapNodeType::Literal) {
                    return Err(incompatible_node_type(
                        shape,
                        statement,
                        TapNodeType::Literal,
                    ));
                }
                let target = self.compiler.declared_name(reference)?;
                if let Some(id) = self.ids.get(&self.compiler.identity(&target)) {
                    return Ok(ValueConstraint::ShapeReference(id.clone()));
                }
                if !self.compiler.lenient {
                    return Err(CompileError::DanglingShapeReference {
                        reference: reference.clone(),
                        shape: shape.id().to_owned(),
                        property: statement.property_id.clone(),
                    });
                }
                warn!(
                    reference = %reference,
                    shape = %shape.id(),
                    property = %statement.property_id,
                    "dropping the reference to an undefined shape"
                );
                self.warnings.push(CompileWarning::DroppedShapeReference {
                    reference: reference.clone(),
                    shape: shape.id().to_owned(),
                    property: statement.property_id.clone(),
                });
                Ok(node_type.map_or(ValueConstraint::Any, |t| {
                    ValueConstraint::NodeKind(node_kind(t))
                }))
            }
            (None, None) => Ok(node_type.map_or(ValueConstraint::Any, |t| {
                ValueConstraint::NodeKind(node_kind(t))
            })),
        }
    }
}

fn incompatible_node_type(
    shape: &TapShape,
    statement: &TapStatement,
    node_type: TapNodeType,
) -> CompileError {
    CompileError::IncompatibleNodeType {
        shape: shape.id().to_owned(),
        property: statement.property_id.clone(),
        node_type,
        line: statement.line,
    }
}

/// Parses a shape, property or datatype name of the profile.
fn parse_name(name: &str) -> Result<IriRef, CompileError> {
    if name.is_empty() {
        return Err(CompileError::invalid_name(name, "empty name"));
    }
    let result = if let Some(iri) = name.strip_prefix('<').and_then(|n| n.strip_suffix('>')) {
        IriRef::iri(iri)
    } else if name.contains("://") {
        IriRef::iri(name)
    } else if let Some((prefix, local)) = name.split_once(':') {
        IriRef::prefixed(prefix, local)
    } else {
        IriRef::local(name)
    };
    result.map_err(|e| CompileError::invalid_name(name, e))
}

fn cardinality(mandatory: bool, repeatable: bool) -> Cardinality {
    match (mandatory, repeatable) {
        (false, false) => Cardinality::One,
        (true, false) => Cardinality::RequiredOne,
        (false, true) => Cardinality::ZeroOrMore,
        (true, true) => Cardinality::OneOrMore,
    }
}

fn node_kind(node_type: TapNodeType) -> NodeKind {
    match node_type {
        TapNodeType::Iri => NodeKind::Iri,
        TapNodeType::BNode => NodeKind::BNode,
        TapNodeType::Literal => NodeKind::Literal,
        TapNodeType::NonLiteral => NodeKind::NonLiteral,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use super::*;
    use oxdctap::{TapRow, build};
    use std::error::Error;

    fn compile_rows(
        compiler: &ShapeCompiler,
        rows: Vec<TapRow>,
    ) -> Result<Result<(Schema, Vec<CompileWarning>), CompileError>, Box<dyn Error>> {
        Ok(compiler.compile_with_warnings(&build(rows)?))
    }

    fn first_constraint(schema: &Schema) -> Option<&TripleConstraint> {
        schema.shapes().next()?.shape.triple_constraints.first()
    }

    #[test]
    fn test_cardinality_table() {
        assert_eq!(cardinality(false, false), Cardinality::One);
        assert_eq!(cardinality(true, false), Cardinality::RequiredOne);
        assert_eq!(cardinality(false, true), Cardinality::ZeroOrMore);
        assert_eq!(cardinality(true, true), Cardinality::OneOrMore);
    }

    #[test]
    fn test_parse_name() -> Result<(), Box<dyn Error>> {
        assert_eq!(parse_name("Person")?, IriRef::local("Person")?);
        assert_eq!(parse_name(":Person")?, IriRef::local("Person")?);
        assert_eq!(parse_name("xsd:string")?, IriRef::prefixed("xsd", "string")?);
        assert_eq!(
            parse_name("<http://schema.org/name>")?,
            IriRef::iri("http://schema.org/name")?
        );
        assert_eq!(
            parse_name("http://schema.org/name")?,
            IriRef::iri("http://schema.org/name")?
        );
        assert!(matches!(
            parse_name("Shape or person"),
            Err(CompileError::InvalidName { .. })
        ));
        assert!(parse_name("<not an iri>").is_err());
        assert!(parse_name("").is_err());
        Ok(())
    }

    #[test]
    fn test_labels_are_copied() -> Result<(), Box<dyn Error>> {
        let (schema, _) = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("name")
                    .with_shape_id("Person")
                    .with_shape_label("Person")
                    .with_property_label("Full name"),
            ],
        )??;
        let decl = schema.shapes().next().ok_or("no shape")?;
        assert_eq!(decl.label.as_deref(), Some("Person"));
        assert_eq!(
            decl.shape.triple_constraints[0].label.as_deref(),
            Some("Full name")
        );
        Ok(())
    }

    #[test]
    fn test_conflicting_value_constraint() -> Result<(), Box<dyn Error>> {
        let result = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("author")
                    .with_shape_id("Book")
                    .with_value_datatype("xsd:string")
                    .with_value_shape("Book"),
            ],
        )?;
        assert!(matches!(
            result,
            Err(CompileError::ConflictingValueConstraint { shape, property, .. })
                if shape == "Book" && property == "author"
        ));
        Ok(())
    }

    #[test]
    fn test_forward_and_self_references() -> Result<(), Box<dyn Error>> {
        let (schema, warnings) = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("author")
                    .with_shape_id("Book")
                    .with_value_shape("Person"),
                TapRow::new("knows")
                    .with_shape_id("Person")
                    .with_value_shape("Person"),
            ],
        )??;
        assert!(warnings.is_empty());
        let references = schema
            .shapes()
            .flat_map(|decl| decl.shape.references().map(|(_, r)| r.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(references, [":Person", ":Person"]);
        Ok(())
    }

    #[test]
    fn test_dangling_reference_strict() -> Result<(), Box<dyn Error>> {
        let result = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("author")
                    .with_shape_id("Book")
                    .with_value_shape("Author"),
            ],
        )?;
        assert!(matches!(
            result,
            Err(CompileError::DanglingShapeReference { reference, .. }) if reference == "Author"
        ));
        Ok(())
    }

    #[test]
    fn test_dangling_reference_lenient() -> Result<(), Box<dyn Error>> {
        let (schema, warnings) = compile_rows(
            &ShapeCompiler::new().lenient(),
            vec![
                TapRow::new("author")
                    .with_shape_id("Book")
                    .with_value_shape("Author")
                    .with_repeatable(true),
            ],
        )??;
        let constraint = first_constraint(&schema).ok_or("no constraint")?;
        assert_eq!(constraint.value, ValueConstraint::Any);
        assert_eq!(constraint.cardinality, Cardinality::ZeroOrMore);
        assert_eq!(
            warnings,
            [CompileWarning::DroppedShapeReference {
                reference: "Author".into(),
                shape: "Book".into(),
                property: "author".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_normalized_shape() -> Result<(), Box<dyn Error>> {
        let result = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("name").with_shape_id("Person"),
                TapRow::new("age").with_shape_id(":Person").with_line(3),
            ],
        )?;
        assert!(matches!(
            result,
            Err(CompileError::DuplicateShape { id, line: 3 }) if id == ":Person"
        ));
        Ok(())
    }

    #[test]
    fn test_duplicate_equivalent_iri() -> Result<(), Box<dyn Error>> {
        let result = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("name").with_shape_id("Person"),
                TapRow::new("age")
                    .with_shape_id("<http://example.org/Person>")
                    .with_line(3),
            ],
        )?;
        assert!(matches!(
            result,
            Err(CompileError::DuplicateShape { id, line: 3 }) if id == "<http://example.org/Person>"
        ));
        Ok(())
    }

    #[test]
    fn test_reference_through_equivalent_iri() -> Result<(), Box<dyn Error>> {
        let (schema, warnings) = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("knows")
                    .with_shape_id("Person")
                    .with_value_shape("<http://example.org/Person>"),
                TapRow::new("author")
                    .with_shape_id("<http://example.org/Book>")
                    .with_value_shape("Person"),
                TapRow::new("cites").with_value_shape(":Book"),
            ],
        )??;
        assert!(warnings.is_empty());
        let references = schema
            .shapes()
            .flat_map(|decl| decl.shape.references().map(|(_, r)| r.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            references,
            [":Person", ":Person", "<http://example.org/Book>"]
        );
        Ok(())
    }

    #[test]
    fn test_undeclared_prefix() -> Result<(), Box<dyn Error>> {
        for row in [
            TapRow::new("foaf:name").with_shape_id("Person"),
            TapRow::new("name").with_shape_id("foaf:Person"),
            TapRow::new("name")
                .with_shape_id("Person")
                .with_value_datatype("foaf:Name"),
            TapRow::new("knows")
                .with_shape_id("Person")
                .with_value_shape("foaf:Person"),
        ] {
            assert!(matches!(
                compile_rows(&ShapeCompiler::new().lenient(), vec![row])?,
                Err(CompileError::UndeclaredPrefix { prefix, .. }) if prefix == "foaf"
            ));
        }
        let (schema, _) = compile_rows(
            &ShapeCompiler::new().with_prefix("foaf", "http://xmlns.com/foaf/0.1/")?,
            vec![TapRow::new("foaf:name").with_shape_id("Person")],
        )??;
        assert_eq!(
            first_constraint(&schema).ok_or("no constraint")?.predicate,
            IriRef::prefixed("foaf", "name")?
        );
        Ok(())
    }

    #[test]
    fn test_default_prefix_must_be_declared() -> Result<(), Box<dyn Error>> {
        let result = compile_rows(
            &ShapeCompiler::new().without_prefixes(),
            vec![TapRow::new("<http://example.org/name>").with_shape_id("Person")],
        )?;
        assert!(matches!(
            result,
            Err(CompileError::UndeclaredPrefix { name, prefix }) if name == "Person" && prefix.is_empty()
        ));
        Ok(())
    }

    #[test]
    fn test_resolved_datatype_needs_no_declaration() -> Result<(), Box<dyn Error>> {
        let resolver =
            PrefixMap::new().with_prefix("schema", "http://schema.org/")?;
        let (schema, _) = compile_rows(
            &ShapeCompiler::new().with_prefix_resolver(resolver),
            vec![
                TapRow::new("price")
                    .with_shape_id("Offer")
                    .with_value_datatype("schema:Number"),
            ],
        )??;
        assert_eq!(
            first_constraint(&schema).ok_or("no constraint")?.value,
            ValueConstraint::Datatype(IriRef::iri("http://schema.org/Number")?)
        );
        Ok(())
    }

    #[test]
    fn test_dangling_reference_lenient_keeps_node_type() -> Result<(), Box<dyn Error>> {
        let (schema, warnings) = compile_rows(
            &ShapeCompiler::new().lenient(),
            vec![
                TapRow::new("author")
                    .with_shape_id("Book")
                    .with_value_node_type(TapNodeType::Iri)
                    .with_value_shape("Author"),
            ],
        )??;
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            first_constraint(&schema).ok_or("no constraint")?.value,
            ValueConstraint::NodeKind(NodeKind::Iri)
        );
        Ok(())
    }

    #[test]
    fn test_node_types() -> Result<(), Box<dyn Error>> {
        let (schema, _) = compile_rows(
            &ShapeCompiler::new(),
            vec![
                TapRow::new("homepage")
                    .with_shape_id("Person")
                    .with_value_node_type(TapNodeType::Iri),
                TapRow::new("name")
                    .with_value_node_type(TapNodeType::Literal)
                    .with_value_datatype("xsd:string"),
                TapRow::new("knows")
                    .with_value_node_type(TapNodeType::NonLiteral)
                    .with_value_shape("Person"),
            ],
        )??;
        let values = schema
            .shapes()
            .flat_map(|decl| decl.shape.triple_constraints.iter().map(|tc| tc.value.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            values,
            [
                ValueConstraint::NodeKind(NodeKind::Iri),
                ValueConstraint::Datatype(IriRef::prefixed("xsd", "string")?),
                ValueConstraint::ShapeReference(IriRef::local("Person")?),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_incompatible_node_types() -> Result<(), Box<dyn Error>> {
        for row in [
            TapRow::new("name")
                .with_shape_id("Person")
                .with_value_node_type(TapNodeType::Iri)
                .with_value_datatype("xsd:string"),
            TapRow::new("knows")
                .with_shape_id("Person")
                .with_value_node_type(TapNodeType::Literal)
                .with_value_shape("Person"),
        ] {
            assert!(matches!(
                compile_rows(&ShapeCompiler::new(), vec![row])?,
                Err(CompileError::IncompatibleNodeType { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_prefix_resolution() -> Result<(), Box<dyn Error>> {
        let rows = || {
            vec![
                TapRow::new("name")
                    .with_shape_id("Person")
                    .with_value_datatype("xsd:string"),
            ]
        };
        let (schema, _) = compile_rows(&ShapeCompiler::new(), rows())??;
        assert_eq!(
            first_constraint(&schema).ok_or("no constraint")?.value,
            ValueConstraint::Datatype(IriRef::prefixed("xsd", "string")?)
        );

        let compiler = ShapeCompiler::new();
        let compiler = compiler
            .clone()
            .with_prefix_resolver(compiler.prefixes().clone());
        let (schema, _) = compile_rows(&compiler, rows())??;
        assert_eq!(
            first_constraint(&schema).ok_or("no constraint")?.value,
            ValueConstraint::Datatype(IriRef::iri("http://www.w3.org/2001/XMLSchema#string")?)
        );
        Ok(())
    }

    #[test]
    fn test_prefix_configuration() -> Result<(), Box<dyn Error>> {
        let compiler = ShapeCompiler::new()
            .without_prefixes()
            .with_prefix("ex", "http://example.com/")?;
        let (schema, _) = compile_rows(
            &compiler,
            vec![TapRow::new("ex:name").with_shape_id("ex:Person")],
        )??;
        assert_eq!(
            schema.prefixes().iter().collect::<Vec<_>>(),
            [("ex", "http://example.com/")]
        );
        assert!(
            ShapeCompiler::new()
                .with_prefix("bad prefix", "http://example.com/")
                .is_err()
        );
        Ok(())
    }
}
