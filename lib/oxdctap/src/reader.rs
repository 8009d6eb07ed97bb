use crate::error::ParseError;
use crate::row::{TapNodeType, TapRow};
use csv::{Position, ReaderBuilder, StringRecord};
use std::io::Read;
use tracing::{debug, trace};

const SHAPE_ID: &str = "shapeId";
const SHAPE_LABEL: &str = "shapeLabel";
const PROPERTY_ID: &str = "propertyId";
const PROPERTY_LABEL: &str = "propertyLabel";
const MANDATORY: &str = "Mandatory";
const REPEATABLE: &str = "Repeatable";
const VALUE_NODE_TYPE: &str = "valueNodeType";
const VALUE_DATATYPE: &str = "valueDatatype";
const VALUE_SHAPE: &str = "valueShape";

/// A [DCTAP](https://www.dublincore.org/specifications/dctap/) table reader.
///
/// The first line of the table is the header declaring the columns.
/// The recognized columns are `shapeId`, `shapeLabel`, `propertyId`, `propertyLabel`, `Mandatory`,
/// `Repeatable`, `valueNodeType`, `valueDatatype` and `valueShape`, in any order.
/// Only `propertyId` is required and other columns are ignored.
///
/// ```
/// use oxdctap::TapReader;
///
/// let rows = TapReader::new().parse_str(
///     "shapeId,propertyId,Mandatory\nPerson,name,true\n,knows,false",
/// )?;
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].shape_id.as_deref(), Some("Person"));
/// assert!(rows[0].mandatory);
/// assert_eq!(rows[1].shape_id, None);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct TapReader {
    delimiter: u8,
    quote: u8,
}

impl TapReader {
    /// Builds a reader for comma separated tables with `"` as quote character.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter, e.g. `b'\t'` for tab separated tables.
    #[inline]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    #[inline]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Reads all the rows of a table stored in a string.
    pub fn parse_str(&self, text: &str) -> Result<Vec<TapRow>, ParseError> {
        self.parse_read(text.as_bytes())
    }

    /// Reads all the rows of a table from a [`Read`] implementation.
    ///
    /// Blank rows are skipped.
    pub fn parse_read(&self, read: impl Read) -> Result<Vec<TapRow>, ParseError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(read);
        let mut records = reader.records();

        let columns = loop {
            let Some(record) = records.next() else {
                return Err(ParseError::MissingHeader);
            };
            let record = record?;
            if !is_blank(&record) {
                break Columns::from_header(&record)?;
            }
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            if is_blank(&record) {
                continue;
            }
            let row = columns.row(&record)?;
            trace!(line = row.line, property = %row.property_id, "read DCTAP row");
            rows.push(row);
        }
        debug!(rows = rows.len(), "read DCTAP table");
        Ok(rows)
    }
}

impl Default for TapReader {
    #[inline]
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Positions of the recognized columns inside of the table records.
struct Columns {
    shape_id: Option<usize>,
    shape_label: Option<usize>,
    property_id: usize,
    property_label: Option<usize>,
    mandatory: Option<usize>,
    repeatable: Option<usize>,
    value_node_type: Option<usize>,
    value_datatype: Option<usize>,
    value_shape: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, ParseError> {
        // The first occurrence of a repeated column wins
        let position = |name: &str| header.iter().position(|h| h.trim() == name);
        Ok(Self {
            shape_id: position(SHAPE_ID),
            shape_label: position(SHAPE_LABEL),
            property_id: position(PROPERTY_ID).ok_or(ParseError::MissingColumn {
                column: PROPERTY_ID,
            })?,
            property_label: position(PROPERTY_LABEL),
            mandatory: position(MANDATORY),
            repeatable: position(REPEATABLE),
            value_node_type: position(VALUE_NODE_TYPE),
            value_datatype: position(VALUE_DATATYPE),
            value_shape: position(VALUE_SHAPE),
        })
    }

    fn row(&self, record: &StringRecord) -> Result<TapRow, ParseError> {
        let line = record.position().map_or(0, Position::line);
        let property_id =
            field(record, Some(self.property_id)).ok_or(ParseError::MissingProperty { line })?;
        let value_node_type = field(record, self.value_node_type)
            .map(|value| {
                value
                    .parse::<TapNodeType>()
                    .map_err(|()| ParseError::invalid_node_type(line, value))
            })
            .transpose()?;
        Ok(TapRow {
            shape_id: field(record, self.shape_id).map(Into::into),
            shape_label: field(record, self.shape_label).map(Into::into),
            property_id: property_id.into(),
            property_label: field(record, self.property_label).map(Into::into),
            mandatory: parse_boolean(field(record, self.mandatory), line, MANDATORY)?,
            repeatable: parse_boolean(field(record, self.repeatable), line, REPEATABLE)?,
            value_node_type,
            value_datatype: field(record, self.value_datatype).map(Into::into),
            value_shape: field(record, self.value_shape).map(Into::into),
            line,
        })
    }
}

/// Trimmed value of a column, `None` if the column is not declared, missing from the record or empty.
fn field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|v| v.trim().is_empty())
}

fn parse_boolean(value: Option<&str>, line: u64, column: &'static str) -> Result<bool, ParseError> {
    match value {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(ParseError::invalid_boolean(line, column, v)),
    }
}
