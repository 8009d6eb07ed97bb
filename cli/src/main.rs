use crate::cli::Args;
use anyhow::{Context, bail, ensure};
use clap::Parser;
use dctap2shex::{Converter, ShapeCompiler};
use oxdctap::TapReader;
use oxshex::{ShExFormat, ShExFormatter};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Write, stdin, stdout};
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs)?;

    let format = if let Some(format) = &args.format {
        shex_format_from_name(format)?
    } else if let Some(output) = &args.output {
        shex_format_from_path(output)
    } else {
        ShExFormat::default()
    };
    let mut formatter = ShExFormatter::new()
        .with_format(format)
        .with_indent(args.indent);
    if args.labels {
        formatter = formatter.with_labels_as_comments();
    }
    if args.color {
        formatter = formatter.with_styles();
    }

    let mut converter = Converter::new()
        .with_reader(TapReader::new().with_delimiter(delimiter(args.delimiter)?))
        .with_compiler(compiler(&args)?);
    let read = if let Some(file) = &args.file {
        let file =
            File::open(file).with_context(|| format!("Not able to open {}", file.display()))?;
        converter.read_tap_from_reader(file)
    } else {
        converter.read_tap_from_reader(stdin().lock())
    };
    read.context("Not able to read the profile")?;
    converter
        .compile()
        .context("Not able to compile the profile")?;
    debug!(
        warnings = converter.warnings().len(),
        "compiled the profile"
    );

    let mut schema = converter.serialize(&formatter)?;
    if !schema.is_empty() && !schema.ends_with('\n') {
        schema.push('\n');
    }
    if let Some(output) = &args.output {
        fs::write(output, schema)
            .with_context(|| format!("Not able to write {}", output.display()))?;
    } else {
        let mut stdout = stdout().lock();
        stdout.write_all(schema.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn init_logging(json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let result = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
    result
        .map_err(|e| anyhow::anyhow!(e))
        .context("Not able to initialize the logs")
}

fn compiler(args: &Args) -> anyhow::Result<ShapeCompiler> {
    let mut compiler = ShapeCompiler::new();
    if !args.prefixes.is_empty() {
        compiler = compiler.without_prefixes();
        for declaration in &args.prefixes {
            let (name, iri) = declaration.split_once('=').with_context(|| {
                format!("The prefix declaration '{declaration}' is not of the form NAME=IRI")
            })?;
            compiler = compiler
                .with_prefix(name, iri)
                .with_context(|| format!("Invalid prefix declaration {declaration}"))?;
        }
    }
    if args.resolve_prefixes {
        let prefixes = compiler.prefixes().clone();
        compiler = compiler.with_prefix_resolver(prefixes);
    }
    if args.lenient {
        compiler = compiler.lenient();
    }
    Ok(compiler)
}

fn delimiter(delimiter: char) -> anyhow::Result<u8> {
    ensure!(
        delimiter.is_ascii(),
        "The delimiter '{delimiter}' is not an ASCII character"
    );
    Ok(u8::try_from(delimiter)?)
}

fn shex_format_from_path(path: &Path) -> ShExFormat {
    let format = path
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ShExFormat::from_extension);
    if format.is_none() {
        warn!(
            path = %path.display(),
            "not able to guess the output format from the file extension, writing ShExC"
        );
    }
    format.unwrap_or_default()
}

fn shex_format_from_name(name: &str) -> anyhow::Result<ShExFormat> {
    if let Some(t) = ShExFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = ShExFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The output format '{name}' is unknown")
}
