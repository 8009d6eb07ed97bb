#![allow(clippy::panic_in_result_fn)]

use dctap2shex::{CompileError, ConvertError, Converter, ShapeCompiler, Stage};
use oxshex::{Cardinality, IriRef, ShExFormat, ShExFormatter};
use std::error::Error;

const PERSON_PROFILE: &str = "shapeId,shapeLabel,propertyId,Mandatory,Repeatable,valueDatatype,valueShape
Person,Shape or person,name,true,false,xsd:string,
,,birthdate,false,false,xsd:date,
";

const BOOK_PROFILE: &str = "shapeId,shapeLabel,propertyId,propertyLabel,Mandatory,Repeatable,valueNodeType,valueDatatype,valueShape
Book,Book,dct:title,Title,true,false,literal,xsd:string,
,,dct:creator,Author,true,true,,,Author
,,dct:subject,Subject,false,true,IRI,,
Author,Author,foaf:name,Name,true,false,,xsd:string,
,,foaf:knows,,false,true,,,Author
";

fn book_converter() -> Result<Converter, Box<dyn Error>> {
    Ok(Converter::new().with_compiler(
        ShapeCompiler::new()
            .with_prefix("dct", "http://purl.org/dc/terms/")?
            .with_prefix("foaf", "http://xmlns.com/foaf/0.1/")?,
    ))
}

#[test]
fn test_person_example() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        Converter::new().convert(PERSON_PROFILE, &ShExFormatter::new())?,
        "PREFIX : <http://example.org/>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>

:Person {
  :name xsd:string ;
  :birthdate xsd:date
}
"
    );
    Ok(())
}

#[test]
fn test_person_example_with_labels() -> Result<(), Box<dyn Error>> {
    let output = Converter::new().convert(
        PERSON_PROFILE,
        &ShExFormatter::new().with_labels_as_comments(),
    )?;
    assert!(output.contains("\n# Shape or person\n:Person {\n"));
    Ok(())
}

#[test]
fn test_books_profile() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        book_converter()?.convert(BOOK_PROFILE, &ShExFormatter::new())?,
        "PREFIX : <http://example.org/>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
PREFIX dct: <http://purl.org/dc/terms/>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>

:Book {
  dct:title xsd:string ;
  dct:creator @:Author + ;
  dct:subject IRI *
}

:Author {
  foaf:name xsd:string ;
  foaf:knows @:Author *
}
"
    );
    Ok(())
}

#[test]
fn test_cardinalities() -> Result<(), Box<dyn Error>> {
    let mut converter = Converter::new();
    converter.read_tap(
        "shapeId,propertyId,Mandatory,Repeatable
S,a,false,false
,b,true,false
,c,false,true
,d,true,true",
    )?;
    converter.compile()?;
    let schema = converter.schema().ok_or("no schema")?;
    let shape = schema.get_shape(&IriRef::local("S")?).ok_or("no shape")?;
    let cardinalities = shape
        .shape
        .triple_constraints
        .iter()
        .map(|tc| tc.cardinality)
        .collect::<Vec<_>>();
    assert_eq!(
        cardinalities,
        [
            Cardinality::One,
            Cardinality::RequiredOne,
            Cardinality::ZeroOrMore,
            Cardinality::OneOrMore
        ]
    );
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<(), Box<dyn Error>> {
    for format in [ShExFormat::ShExC, ShExFormat::ShExJ] {
        let formatter = ShExFormatter::new().with_format(format);
        let first = book_converter()?.convert(BOOK_PROFILE, &formatter)?;
        let second = book_converter()?.convert(BOOK_PROFILE, &formatter)?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_shexj_output() -> Result<(), Box<dyn Error>> {
    let output = Converter::new().convert(
        PERSON_PROFILE,
        &ShExFormatter::new().with_format(ShExFormat::ShExJ),
    )?;
    let json: serde_json::Value = serde_json::from_str(&output)?;
    let name = &json["shapes"][0]["shapeExpr"]["expression"]["expressions"][0];
    assert_eq!(name["predicate"], "http://example.org/name");
    assert_eq!(
        name["valueExpr"]["datatype"],
        "http://www.w3.org/2001/XMLSchema#string"
    );
    Ok(())
}

#[test]
fn test_conflicting_value_constraint() -> Result<(), Box<dyn Error>> {
    let error = Converter::new()
        .convert(
            "shapeId,propertyId,valueDatatype,valueShape\nBook,author,xsd:string,Person\nPerson,name,,",
            &ShExFormatter::new(),
        )
        .err()
        .ok_or("the conversion should fail")?;
    assert!(matches!(
        error,
        ConvertError::Compile(CompileError::ConflictingValueConstraint { line: 2, .. })
    ));
    assert_eq!(
        error.to_string(),
        "Property author of shape Book (line 2) has both a value datatype and a value shape"
    );
    Ok(())
}

#[test]
fn test_dangling_reference() -> Result<(), Box<dyn Error>> {
    let profile = "shapeId,propertyId,valueShape\nBook,author,Author";
    let mut strict = Converter::new();
    let error = strict
        .convert(profile, &ShExFormatter::new())
        .err()
        .ok_or("the conversion should fail")?;
    assert_eq!(
        error.to_string(),
        "Property author of shape Book references the undefined shape Author"
    );
    assert_eq!(strict.stage(), Stage::HasTap);

    let mut lenient = Converter::new().with_compiler(ShapeCompiler::new().lenient());
    let output = lenient.convert(profile, &ShExFormatter::new())?;
    assert!(output.ends_with(":Book {\n  :author .\n}\n"));
    assert_eq!(lenient.warnings().len(), 1);
    Ok(())
}

#[test]
fn test_cyclic_profile_terminates() -> Result<(), Box<dyn Error>> {
    let output = Converter::new().convert(
        "shapeId,propertyId,valueShape\nA,toB,B\nB,toA,A\n,self,B",
        &ShExFormatter::new(),
    )?;
    assert!(output.contains(":A {\n  :toB @:B\n}"));
    assert!(output.contains(":B {\n  :toA @:A ;\n  :self @:B\n}"));
    Ok(())
}

#[test]
fn test_orphan_row() -> Result<(), Box<dyn Error>> {
    assert!(matches!(
        Converter::new().convert("shapeId,propertyId\n,name", &ShExFormatter::new()),
        Err(ConvertError::Build(_))
    ));
    Ok(())
}

/// Checks that every prefixed name written in a ShExC document uses a declared prefix.
fn assert_prefixes_declared(shexc: &str) {
    let declared = shexc
        .lines()
        .filter_map(|line| line.strip_prefix("PREFIX "))
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(prefix, _)| prefix)
        .collect::<Vec<_>>();
    for line in shexc.lines() {
        if line.starts_with("PREFIX ") || line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let token = token.trim_start_matches('@');
            if token.starts_with('<') {
                continue;
            }
            if let Some((prefix, _)) = token.split_once(':') {
                assert!(
                    declared.contains(&prefix),
                    "the prefix '{prefix}' of {token} is not declared in:\n{shexc}"
                );
            }
        }
    }
}

#[test]
fn test_shexc_prefixes_are_declared() -> Result<(), Box<dyn Error>> {
    let formatter = ShExFormatter::new().with_labels_as_comments();
    assert_prefixes_declared(&Converter::new().convert(PERSON_PROFILE, &formatter)?);
    assert_prefixes_declared(&book_converter()?.convert(BOOK_PROFILE, &formatter)?);
    assert_prefixes_declared(
        &Converter::new()
            .with_compiler(ShapeCompiler::new().lenient())
            .convert(
                "shapeId,propertyId,valueNodeType,valueShape\nBook,author,iri,Author\n,<http://purl.org/dc/terms/title>,,",
                &formatter,
            )?,
    );
    let compiler = ShapeCompiler::new().without_prefixes().with_prefix("ex", "http://example.com/")?;
    let mut converter = Converter::new().with_compiler(compiler);
    assert_prefixes_declared(&converter.convert(
        "shapeId,propertyId,valueDatatype,valueShape\nex:Person,ex:name,<http://www.w3.org/2001/XMLSchema#string>,\n,ex:knows,,ex:Person",
        &formatter,
    )?);
    Ok(())
}

#[test]
fn test_undeclared_prefix() -> Result<(), Box<dyn Error>> {
    let profile = "shapeId,propertyId,valueDatatype\nPerson,foaf:name,xsd:string\n";
    let mut converter = Converter::new();
    let error = converter
        .convert(profile, &ShExFormatter::new())
        .err()
        .ok_or("the conversion should fail")?;
    assert!(matches!(
        error,
        ConvertError::Compile(CompileError::UndeclaredPrefix { .. })
    ));
    assert_eq!(
        error.to_string(),
        "The prefix 'foaf' of 'foaf:name' is not declared"
    );
    assert!(converter.schema().is_none());

    let output = Converter::new()
        .with_compiler(ShapeCompiler::new().with_prefix("foaf", "http://xmlns.com/foaf/0.1/")?)
        .convert(profile, &ShExFormatter::new().with_format(ShExFormat::ShExJ))?;
    let json: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(
        json["shapes"][0]["shapeExpr"]["expression"]["predicate"],
        "http://xmlns.com/foaf/0.1/name"
    );
    Ok(())
}

#[test]
fn test_equivalent_shape_iris() -> Result<(), Box<dyn Error>> {
    let error = Converter::new()
        .convert(
            "shapeId,propertyId\nPerson,name\n<http://example.org/Person>,age\n",
            &ShExFormatter::new(),
        )
        .err()
        .ok_or("the conversion should fail")?;
    assert!(matches!(
        error,
        ConvertError::Compile(CompileError::DuplicateShape { line: 3, .. })
    ));

    let output = Converter::new().convert(
        "shapeId,propertyId,valueShape\nPerson,knows,<http://example.org/Person>\n",
        &ShExFormatter::new(),
    )?;
    assert!(output.ends_with(":Person {\n  :knows @:Person\n}\n"));
    Ok(())
}
