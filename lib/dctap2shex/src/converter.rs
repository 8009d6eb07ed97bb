use crate::compiler::ShapeCompiler;
use crate::error::{CompileWarning, ConvertError, Step};
use oxdctap::{TapReader, TapShape, build};
use oxshex::{Schema, ShExFormatter};
use std::io::Read;
use tracing::debug;

/// Progress of a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing has been read.
    Empty,
    /// A profile has been read but not compiled.
    HasTap,
    /// The current profile has been compiled into a schema.
    HasSchema,
}

/// Conversion pipeline from a DCTAP profile to a ShEx schema.
///
/// It holds the last profile read and the schema compiled from it.
/// A failing step leaves the converter as it was.
///
/// ```
/// use dctap2shex::{Converter, Stage};
/// use oxshex::ShExFormatter;
///
/// let mut converter = Converter::new();
/// converter.read_tap(
///     "shapeId,shapeLabel,propertyId,Mandatory,Repeatable,valueDatatype,valueShape
/// Person,Shape or person,name,true,false,xsd:string,
/// ,,birthdate,false,false,xsd:date,",
/// )?;
/// assert_eq!(converter.stage(), Stage::HasTap);
/// converter.compile()?;
/// assert_eq!(
///     converter.serialize(&ShExFormatter::new())?,
///     "PREFIX : <http://example.org/>
/// PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
///
/// :Person {
///   :name xsd:string ;
///   :birthdate xsd:date
/// }
/// "
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Converter {
    reader: TapReader,
    compiler: ShapeCompiler,
    tap: Option<Vec<TapShape>>,
    compiled: Option<(Schema, Vec<CompileWarning>)>,
}

impl Converter {
    /// Builds an empty converter with the default reader and compiler.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reader used to parse profiles.
    #[inline]
    pub fn with_reader(mut self, reader: TapReader) -> Self {
        self.reader = reader;
        self
    }

    /// Sets the compiler used to build schemas.
    #[inline]
    pub fn with_compiler(mut self, compiler: ShapeCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// Reads a profile, replacing the current one and dropping its schema.
    pub fn read_tap(&mut self, text: &str) -> Result<(), ConvertError> {
        let rows = self.reader.parse_str(text)?;
        self.set_tap(build(rows)?);
        Ok(())
    }

    /// Reads a profile from a [`Read`] implementation, replacing the current one and dropping its schema.
    pub fn read_tap_from_reader(&mut self, read: impl Read) -> Result<(), ConvertError> {
        let rows = self.reader.parse_read(read)?;
        self.set_tap(build(rows)?);
        Ok(())
    }

    fn set_tap(&mut self, shapes: Vec<TapShape>) {
        debug!(shapes = shapes.len(), "loaded DCTAP profile");
        self.tap = Some(shapes);
        self.compiled = None;
    }

    /// Compiles the current profile into a schema.
    pub fn compile(&mut self) -> Result<(), ConvertError> {
        let shapes = self
            .tap
            .as_deref()
            .ok_or(ConvertError::StageNotReady(Step::Compile))?;
        self.compiled = Some(self.compiler.compile_with_warnings(shapes)?);
        Ok(())
    }

    /// Serializes the current schema.
    pub fn serialize(&self, formatter: &ShExFormatter) -> Result<String, ConvertError> {
        let schema = self
            .schema()
            .ok_or(ConvertError::StageNotReady(Step::Serialize))?;
        Ok(formatter.serialize(schema))
    }

    /// Reads, compiles and serializes a profile.
    pub fn convert(
        &mut self,
        text: &str,
        formatter: &ShExFormatter,
    ) -> Result<String, ConvertError> {
        self.read_tap(text)?;
        self.compile()?;
        self.serialize(formatter)
    }

    /// The current progress.
    pub fn stage(&self) -> Stage {
        match (&self.tap, &self.compiled) {
            (_, Some(_)) => Stage::HasSchema,
            (Some(_), None) => Stage::HasTap,
            (None, None) => Stage::Empty,
        }
    }

    /// The shapes of the current profile.
    #[inline]
    pub fn tap_shapes(&self) -> Option<&[TapShape]> {
        self.tap.as_deref()
    }

    /// The schema compiled from the current profile.
    #[inline]
    pub fn schema(&self) -> Option<&Schema> {
        self.compiled.as_ref().map(|(schema, _)| schema)
    }

    /// The warnings of the last compilation, empty if there is no schema.
    #[inline]
    pub fn warnings(&self) -> &[CompileWarning] {
        self.compiled
            .as_ref()
            .map_or(&[], |(_, warnings)| warnings.as_slice())
    }

    /// Forgets the current profile and schema.
    pub fn reset(&mut self) {
        self.tap = None;
        self.compiled = None;
    }
}
