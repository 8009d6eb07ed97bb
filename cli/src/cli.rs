use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, name = "dctap2shex")]
/// Converts DCTAP application profiles into ShEx schemas
pub struct Args {
    /// File to read the profile from
    ///
    /// If no file is given, stdin is read.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
    /// File to write the schema to
    ///
    /// If no file is given, stdout is written.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// The output format
    ///
    /// It can be a name like shexc or shexj, an extension like shex or json, or a media type like text/shex.
    /// By default the format is guessed from the output file extension, ShExC being used if there is no output file.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
    /// Number of spaces of each indentation level
    ///
    /// 0 writes ShExJ on a single line.
    #[arg(long, default_value_t = 2)]
    pub indent: usize,
    /// Writes shape and property labels as ShExC comments
    #[arg(long)]
    pub labels: bool,
    /// Highlights the ShExC output with ANSI colors
    #[arg(long)]
    pub color: bool,
    /// Replaces references to undefined shapes by constraints accepting any value instead of failing
    ///
    /// Each dropped reference is logged as a warning.
    #[arg(long)]
    pub lenient: bool,
    /// Field delimiter of the profile, e.g. ';' or a tab
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
    /// Prefix declaration of the schema, written NAME=IRI
    ///
    /// This option can be repeated. If set, it replaces the default declarations of ':' and 'xsd'.
    #[arg(long = "prefix", value_name = "NAME=IRI")]
    pub prefixes: Vec<String>,
    /// Expands the datatypes written with a declared prefix into full IRIs
    #[arg(long)]
    pub resolve_prefixes: bool,
    /// Writes the logs as JSON lines
    ///
    /// The log level is set with the RUST_LOG environment variable and defaults to warn.
    #[arg(long)]
    pub json_logs: bool,
}
