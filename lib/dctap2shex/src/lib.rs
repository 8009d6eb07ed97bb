#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod compiler;
mod converter;
mod error;
mod resolver;

pub use compiler::ShapeCompiler;
pub use converter::{Converter, Stage};
pub use error::{CompileError, CompileWarning, ConvertError, Step};
pub use resolver::{PassThrough, PrefixResolver};
