use std::fmt;
use std::str::FromStr;

/// One line of a DCTAP table.
///
/// A row without [`shape_id`](Self::shape_id) continues the shape opened by a previous row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TapRow {
    /// Identifier of the shape the row opens or continues (`shapeId`).
    pub shape_id: Option<String>,
    /// Human readable name of the shape (`shapeLabel`).
    pub shape_label: Option<String>,
    /// The property constrained by this row (`propertyId`).
    pub property_id: String,
    /// Human readable name of the property (`propertyLabel`).
    pub property_label: Option<String>,
    /// If the property must be present (`Mandatory`).
    pub mandatory: bool,
    /// If the property may be present more than once (`Repeatable`).
    pub repeatable: bool,
    /// Kind of RDF node allowed as value (`valueNodeType`).
    pub value_node_type: Option<TapNodeType>,
    /// Datatype of literal values, e.g. `xsd:string` (`valueDatatype`).
    pub value_datatype: Option<String>,
    /// Shape the values must conform to (`valueShape`).
    pub value_shape: Option<String>,
    /// 1-based line of the row in the source table, 0 if the row has been built in code.
    pub line: u64,
}

impl TapRow {
    /// Builds a row constraining the given property with every other column empty.
    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            ..Self::default()
        }
    }

    /// Sets the shape the row opens or continues.
    #[must_use]
    pub fn with_shape_id(mut self, shape_id: impl Into<String>) -> Self {
        self.shape_id = Some(shape_id.into());
        self
    }

    /// Sets the shape label.
    #[must_use]
    pub fn with_shape_label(mut self, shape_label: impl Into<String>) -> Self {
        self.shape_label = Some(shape_label.into());
        self
    }

    /// Sets the property label.
    #[must_use]
    pub fn with_property_label(mut self, property_label: impl Into<String>) -> Self {
        self.property_label = Some(property_label.into());
        self
    }

    /// Sets the `Mandatory` flag.
    #[must_use]
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the `Repeatable` flag.
    #[must_use]
    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Sets the value node type.
    #[must_use]
    pub fn with_value_node_type(mut self, node_type: TapNodeType) -> Self {
        self.value_node_type = Some(node_type);
        self
    }

    /// Sets the value datatype.
    #[must_use]
    pub fn with_value_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.value_datatype = Some(datatype.into());
        self
    }

    /// Sets the value shape.
    #[must_use]
    pub fn with_value_shape(mut self, shape: impl Into<String>) -> Self {
        self.value_shape = Some(shape.into());
        self
    }

    /// Sets the source line of the row.
    #[must_use]
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}

/// Kind of RDF node allowed by the `valueNodeType` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapNodeType {
    /// An IRI.
    Iri,
    /// A blank node.
    BNode,
    /// A literal.
    Literal,
    /// An IRI or a blank node.
    NonLiteral,
}

impl TapNodeType {
    /// The keyword used in DCTAP tables.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iri => "IRI",
            Self::BNode => "BNODE",
            Self::Literal => "LITERAL",
            Self::NonLiteral => "NONLITERAL",
        }
    }
}

impl FromStr for TapNodeType {
    type Err = ();

    /// Parses a node type keyword, ignoring case.
    ///
    /// ```
    /// use oxdctap::TapNodeType;
    ///
    /// assert_eq!("iri".parse(), Ok(TapNodeType::Iri));
    /// assert_eq!("NonLiteral".parse(), Ok(TapNodeType::NonLiteral));
    /// assert!("uri".parse::<TapNodeType>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, ()> {
        [Self::Iri, Self::BNode, Self::Literal, Self::NonLiteral]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .ok_or(())
    }
}

impl fmt::Display for TapNodeType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
