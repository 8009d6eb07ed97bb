//! [ShExC](https://shex.io/shex-semantics/#shexc) writer.

use crate::formatter::ShExFormatter;
use crate::model::{Schema, ShapeDecl, TripleConstraint, ValueConstraint};
use crate::style::{Painter, Token};
use std::borrow::Cow;
use std::fmt;

pub(crate) fn render(schema: &Schema, formatter: &ShExFormatter) -> String {
    CompactSchema { schema, formatter }.to_string()
}

struct CompactSchema<'a> {
    schema: &'a Schema,
    formatter: &'a ShExFormatter,
}

impl CompactSchema<'_> {
    fn painter(&self) -> Painter {
        Painter::new(self.formatter.styled())
    }

    fn write_comment(&self, f: &mut fmt::Formatter<'_>, indent: &str, label: &str) -> fmt::Result {
        if self.formatter.labels_as_comments() {
            let comment = format!("# {}", escape_comment(label));
            writeln!(f, "{indent}{}", self.painter().paint(Token::Comment, comment))?;
        }
        Ok(())
    }

    fn write_shape(&self, f: &mut fmt::Formatter<'_>, decl: &ShapeDecl) -> fmt::Result {
        let painter = self.painter();
        if let Some(label) = &decl.label {
            self.write_comment(f, "", label)?;
        }
        write!(f, "{} {{", painter.paint(Token::ShapeId, &decl.id))?;
        let constraints = &decl.shape.triple_constraints;
        if constraints.is_empty() {
            return writeln!(f, "}}");
        }
        writeln!(f)?;
        let indent = " ".repeat(self.formatter.indent());
        for (i, constraint) in constraints.iter().enumerate() {
            if let Some(label) = &constraint.label {
                self.write_comment(f, &indent, label)?;
            }
            f.write_str(&indent)?;
            self.write_triple_constraint(f, constraint)?;
            if i + 1 < constraints.len() {
                writeln!(f, " ;")?;
            } else {
                writeln!(f)?;
            }
        }
        writeln!(f, "}}")
    }

    fn write_triple_constraint(
        &self,
        f: &mut fmt::Formatter<'_>,
        constraint: &TripleConstraint,
    ) -> fmt::Result {
        let painter = self.painter();
        write!(f, "{} ", painter.paint(Token::Predicate, &constraint.predicate))?;
        match &constraint.value {
            ValueConstraint::Datatype(datatype) => {
                write!(f, "{}", painter.paint(Token::Value, datatype))
            }
            ValueConstraint::ShapeReference(reference) => {
                write!(f, "{}", painter.paint(Token::Reference, format!("@{reference}")))
            }
            ValueConstraint::NodeKind(kind) => write!(f, "{}", painter.paint(Token::Keyword, kind)),
            ValueConstraint::Any => write!(f, "{}", painter.paint(Token::Value, '.')),
        }?;
        let cardinality = constraint.cardinality.to_string();
        if !cardinality.is_empty() {
            write!(f, " {cardinality}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CompactSchema<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let painter = self.painter();
        let prefixes = self.schema.prefixes();
        for (name, iri) in prefixes.iter() {
            writeln!(f, "{} {name}: <{iri}>", painter.paint(Token::Keyword, "PREFIX"))?;
        }
        for (i, decl) in self.schema.shapes().enumerate() {
            if i > 0 || !prefixes.is_empty() {
                writeln!(f)?;
            }
            self.write_shape(f, decl)?;
        }
        Ok(())
    }
}

/// Escapes a label so that the comment holding it stays on a single line.
fn escape_comment(label: &str) -> Cow<'_, str> {
    if !label.contains(['\\', '\n', '\r']) {
        return label.into();
    }
    let mut escaped = String::with_capacity(label.len() + 2);
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped.into()
}
