use crate::formatter::ShExFormatter;
use crate::model::Schema;
use crate::{compact, json};
use std::fmt;

/// A function writing a schema in a given syntax.
pub(crate) type Renderer = fn(&Schema, &ShExFormatter) -> String;

/// ShEx serialization formats.
///
/// This enumeration is non exhaustive. New formats might be added in the future.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
#[non_exhaustive]
pub enum ShExFormat {
    /// [ShExC](https://shex.io/shex-semantics/#shexc), the compact syntax
    #[default]
    ShExC,
    /// [ShExJ](https://shex.io/shex-semantics/#shexj), the JSON syntax
    ShExJ,
}

impl ShExFormat {
    /// The format [media type](https://shex.io/shex-semantics/#media-type).
    ///
    /// ```
    /// use oxshex::ShExFormat;
    ///
    /// assert_eq!(ShExFormat::ShExC.media_type(), "text/shex")
    /// ```
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::ShExC => "text/shex",
            Self::ShExJ => "application/shex+json",
        }
    }

    /// The format usual file extension.
    ///
    /// ```
    /// use oxshex::ShExFormat;
    ///
    /// assert_eq!(ShExFormat::ShExJ.file_extension(), "json")
    /// ```
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::ShExC => "shex",
            Self::ShExJ => "json",
        }
    }

    /// The format name.
    ///
    /// ```
    /// use oxshex::ShExFormat;
    ///
    /// assert_eq!(ShExFormat::ShExC.name(), "ShExC")
    /// ```
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShExC => "ShExC",
            Self::ShExJ => "ShExJ",
        }
    }

    /// Looks for a known format from a media type.
    ///
    /// Media type parameters are ignored.
    ///
    /// ```
    /// use oxshex::ShExFormat;
    ///
    /// assert_eq!(
    ///     ShExFormat::from_media_type("text/shex; charset=utf-8"),
    ///     Some(ShExFormat::ShExC)
    /// )
    /// ```
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let media_type = media_type.split(';').next()?.trim();
        [Self::ShExC, Self::ShExJ]
            .into_iter()
            .find(|f| f.media_type().eq_ignore_ascii_case(media_type))
    }

    /// Looks for a known format from an extension or a short name.
    ///
    /// ```
    /// use oxshex::ShExFormat;
    ///
    /// assert_eq!(ShExFormat::from_extension("shex"), Some(ShExFormat::ShExC));
    /// assert_eq!(ShExFormat::from_extension("shexj"), Some(ShExFormat::ShExJ))
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        const EXTENSIONS: [(&str, ShExFormat); 5] = [
            ("shex", ShExFormat::ShExC),
            ("shexc", ShExFormat::ShExC),
            ("json", ShExFormat::ShExJ),
            ("shexj", ShExFormat::ShExJ),
            ("jsonld", ShExFormat::ShExJ),
        ];
        EXTENSIONS
            .into_iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(extension))
            .map(|(_, format)| format)
    }

    /// The function writing schemas in this format.
    pub(crate) fn renderer(self) -> Renderer {
        match self {
            Self::ShExC => compact::render,
            Self::ShExJ => json::render,
        }
    }
}

impl fmt::Display for ShExFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
