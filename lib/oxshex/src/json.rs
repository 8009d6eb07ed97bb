//! [ShExJ](https://shex.io/shex-semantics/#shexj) writer.

use crate::formatter::ShExFormatter;
use crate::iri::{IriRef, PrefixMap};
use crate::model::{Cardinality, Schema, ShapeDecl, TripleConstraint, ValueConstraint};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const SHEX_CONTEXT: &str = "http://www.w3.org/ns/shex.jsonld";

pub(crate) fn render(schema: &Schema, formatter: &ShExFormatter) -> String {
    let document = JsonSchema::new(schema);
    let mut buffer = Vec::new();
    let result = if formatter.indent() == 0 {
        document.serialize(&mut Serializer::new(&mut buffer))
    } else {
        let indent = " ".repeat(formatter.indent());
        document.serialize(&mut Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        ))
    };
    // Writing plain structs with string keys into a Vec never fails
    debug_assert!(result.is_ok(), "ShExJ serialization failed: {result:?}");
    String::from_utf8_lossy(&buffer).into_owned()
}

#[derive(Serialize)]
struct JsonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    shapes: Vec<JsonShapeDecl>,
}

impl JsonSchema {
    fn new(schema: &Schema) -> Self {
        let prefixes = schema.prefixes();
        Self {
            context: SHEX_CONTEXT,
            kind: "Schema",
            shapes: schema
                .shapes()
                .map(|decl| JsonShapeDecl::new(decl, prefixes))
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonShapeDecl {
    #[serde(rename = "type")]
    kind: &'static str,
    id: String,
    #[serde(rename = "shapeExpr")]
    shape_expr: JsonShape,
}

impl JsonShapeDecl {
    fn new(decl: &ShapeDecl, prefixes: &PrefixMap) -> Self {
        let mut constraints = decl
            .shape
            .triple_constraints
            .iter()
            .map(|tc| JsonTripleExpr::TripleConstraint(JsonTripleConstraint::new(tc, prefixes)))
            .collect::<Vec<_>>();
        let expression = match constraints.len() {
            0 => None,
            1 => constraints.pop(),
            _ => Some(JsonTripleExpr::EachOf {
                expressions: constraints,
            }),
        };
        Self {
            kind: "ShapeDecl",
            id: full_iri(&decl.id, prefixes),
            shape_expr: JsonShape {
                kind: "Shape",
                expression,
            },
        }
    }
}

#[derive(Serialize)]
struct JsonShape {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expression: Option<JsonTripleExpr>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonTripleExpr {
    EachOf { expressions: Vec<JsonTripleExpr> },
    TripleConstraint(JsonTripleConstraint),
}

#[derive(Serialize)]
struct JsonTripleConstraint {
    predicate: String,
    #[serde(rename = "valueExpr", skip_serializing_if = "Option::is_none")]
    value_expr: Option<JsonValueExpr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<i64>,
}

impl JsonTripleConstraint {
    fn new(constraint: &TripleConstraint, prefixes: &PrefixMap) -> Self {
        let value_expr = match &constraint.value {
            ValueConstraint::Datatype(datatype) => Some(JsonValueExpr::NodeConstraint(
                JsonNodeConstraint::datatype(full_iri(datatype, prefixes)),
            )),
            ValueConstraint::NodeKind(kind) => Some(JsonValueExpr::NodeConstraint(
                JsonNodeConstraint::node_kind(kind.json_name()),
            )),
            ValueConstraint::ShapeReference(reference) => {
                Some(JsonValueExpr::Reference(full_iri(reference, prefixes)))
            }
            ValueConstraint::Any => None,
        };
        let (min, max) = match constraint.cardinality {
            Cardinality::One | Cardinality::RequiredOne => (None, None),
            cardinality => (
                Some(cardinality.min()),
                Some(cardinality.max().map_or(-1, i64::from)),
            ),
        };
        Self {
            predicate: full_iri(&constraint.predicate, prefixes),
            value_expr,
            min,
            max,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonValueExpr {
    Reference(String),
    NodeConstraint(JsonNodeConstraint),
}

#[derive(Serialize)]
struct JsonNodeConstraint {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    datatype: Option<String>,
    #[serde(rename = "nodeKind", skip_serializing_if = "Option::is_none")]
    node_kind: Option<&'static str>,
}

impl JsonNodeConstraint {
    fn datatype(datatype: String) -> Self {
        Self {
            kind: "NodeConstraint",
            datatype: Some(datatype),
            node_kind: None,
        }
    }

    fn node_kind(node_kind: &'static str) -> Self {
        Self {
            kind: "NodeConstraint",
            datatype: None,
            node_kind: Some(node_kind),
        }
    }
}

/// The full IRI of a reference, or the prefixed name as written if its prefix is not declared.
fn full_iri(iri: &IriRef, prefixes: &PrefixMap) -> String {
    iri.expand(prefixes).unwrap_or_else(|| iri.to_string())
}
