pub mod evaluate;
pub mod init;
pub mod summary;

use crate::formatting::{painter_for, ColorMode, Painter};
use crate::io::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Open the report destination: a file when given, stdout otherwise.
pub(crate) fn open_writer(
    format: OutputFormat,
    output: Option<&Path>,
    plain: bool,
) -> Result<Box<dyn OutputWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    // Files never get ANSI escapes
    let painter: Box<dyn Painter> = if plain || output.is_some() {
        painter_for(ColorMode::Never)
    } else {
        painter_for(ColorMode::Auto.from_env())
    };

    Ok(create_writer(format, destination, painter))
}
