//! Reader for [DCTAP](https://www.dublincore.org/specifications/dctap/) (Dublin Core Tabular Application Profiles).
//!
//! A DCTAP profile is a table where each row constrains one property of a shape:
//!
//! ```text
//! shapeId,shapeLabel,propertyId,Mandatory,Repeatable,valueDatatype,valueShape
//! Person,Shape or person,name,true,false,xsd:string,
//! ,,birthdate,false,false,xsd:date,
//! ```
//!
//! Reading a profile is done in two steps:
//! - [`TapReader`] turns the text into a sequence of [`TapRow`]s,
//! - [`build`] groups the rows into [`TapShape`]s, a row with an empty `shapeId`
//!   continuing the shape of the previous row.
//!
//! ```
//! use oxdctap::{build, TapReader};
//!
//! let rows = TapReader::new().parse_str(
//!     "shapeId,shapeLabel,propertyId,Mandatory,Repeatable,valueDatatype,valueShape
//! Person,Shape or person,name,true,false,xsd:string,
//! ,,birthdate,false,false,xsd:date,",
//! )?;
//! let shapes = build(rows)?;
//! assert_eq!(shapes.len(), 1);
//! assert_eq!(shapes[0].label(), Some("Shape or person"));
//! assert_eq!(shapes[0].statements()[1].property_id, "birthdate");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod reader;
mod row;
mod shape;

pub use error::{BuildError, ParseError};
pub use reader::TapReader;
pub use row::{TapNodeType, TapRow};
pub use shape::{build, TapShape, TapStatement};
