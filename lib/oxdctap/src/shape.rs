use crate::error::BuildError;
use crate::row::{TapNodeType, TapRow};
use rustc_hash::FxHashMap;
use tracing::debug;

/// A shape of a DCTAP profile: the rows sharing the same `shapeId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapShape {
    id: String,
    label: Option<String>,
    statements: Vec<TapStatement>,
    line: u64,
}

impl TapShape {
    /// Builds an empty shape.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            statements: Vec::new(),
            line: 0,
        }
    }

    /// Sets the shape label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a statement at the end of the shape.
    #[must_use]
    pub fn with_statement(mut self, statement: TapStatement) -> Self {
        self.statements.push(statement);
        self
    }

    /// The shape identifier, as written in the `shapeId` column.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The shape label, from the first row naming the shape with a label.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The property constraints of the shape, in table order.
    #[inline]
    pub fn statements(&self) -> &[TapStatement] {
        &self.statements
    }

    /// The line of the row that opened the shape (0 if unknown).
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }
}

/// The property constraint described by a single row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TapStatement {
    /// The constrained property.
    pub property_id: String,
    /// Human readable name of the property.
    pub property_label: Option<String>,
    /// If the property must be present.
    pub mandatory: bool,
    /// If the property may be present more than once.
    pub repeatable: bool,
    /// Kind of RDF node allowed as value.
    pub value_node_type: Option<TapNodeType>,
    /// Datatype of the values.
    pub value_datatype: Option<String>,
    /// Shape the values must conform to.
    pub value_shape: Option<String>,
    /// Source line of the row.
    pub line: u64,
}

impl TapStatement {
    /// Builds a statement constraining the given property with no other restriction.
    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            ..Self::default()
        }
    }
}

impl From<TapRow> for TapStatement {
    fn from(row: TapRow) -> Self {
        Self {
            property_id: row.property_id,
            property_label: row.property_label,
            mandatory: row.mandatory,
            repeatable: row.repeatable,
            value_node_type: row.value_node_type,
            value_datatype: row.value_datatype,
            value_shape: row.value_shape,
            line: row.line,
        }
    }
}

/// Groups rows into shapes.
///
/// A row with a `shapeId` makes it the current shape, creating it if it has not been seen yet.
/// A row without `shapeId` is added to the current shape.
/// Shapes are returned in the order of their first appearance.
///
/// ```
/// use oxdctap::{build, TapReader};
///
/// let rows = TapReader::new().parse_str(
///     "shapeId,propertyId\nPerson,name\n,age\nBook,title\nPerson,knows",
/// )?;
/// let shapes = build(rows)?;
/// assert_eq!(shapes.len(), 2);
/// assert_eq!(shapes[0].id(), "Person");
/// assert_eq!(shapes[0].statements().len(), 3);
/// assert_eq!(shapes[1].id(), "Book");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn build(rows: impl IntoIterator<Item = TapRow>) -> Result<Vec<TapShape>, BuildError> {
    let shapes = rows
        .into_iter()
        .enumerate()
        .try_fold(ShapesAccumulator::default(), |acc, (position, row)| {
            acc.push(position, row)
        })?
        .shapes;
    debug!(shapes = shapes.len(), "grouped DCTAP rows into shapes");
    Ok(shapes)
}

#[derive(Default)]
struct ShapesAccumulator {
    current: Option<usize>,
    by_id: FxHashMap<String, usize>,
    shapes: Vec<TapShape>,
}

impl ShapesAccumulator {
    fn push(mut self, position: usize, mut row: TapRow) -> Result<Self, BuildError> {
        let current = match row.shape_id.take() {
            Some(id) => {
                let label = row.shape_label.take();
                let index = if let Some(index) = self.by_id.get(&id) {
                    *index
                } else {
                    let index = self.shapes.len();
                    self.shapes.push(TapShape {
                        id: id.clone(),
                        label: None,
                        statements: Vec::new(),
                        line: row.line,
                    });
                    self.by_id.insert(id, index);
                    index
                };
                let shape = &mut self.shapes[index];
                if shape.label.is_none() {
                    shape.label = label;
                }
                index
            }
            None => self.current.ok_or(BuildError::OrphanRow {
                position,
                line: row.line,
            })?,
        };
        self.shapes[current].statements.push(row.into());
        self.current = Some(current);
        Ok(self)
    }
}
