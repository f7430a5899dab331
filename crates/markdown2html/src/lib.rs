//! Line-oriented markdown to HTML conversion.
//!
//! Each input line is classified as a heading, a list item, a blank line or
//! paragraph text, and turned into one or more HTML fragments. Only one block
//! container (`<ul>`, `<ol>` or `<p>`) is ever open at a time.

mod classify;
pub mod error;
pub mod fs;
mod line;
mod state;

pub use classify::{classify_line, LineKind};
pub use error::{ConvertError, ConvertResult, ExitCode};
pub use line::{read_lines, LineRecord};
pub use state::{ConversionState, Emitter, BREAK_MARKER};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Emitted HTML, one tag or text line per entry.
pub type HtmlFragments = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines: usize,
    pub fragments: usize,
}

pub fn convert_lines<I, S>(lines: I) -> HtmlFragments
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut emitter = Emitter::new();

    for (idx, line) in lines.into_iter().enumerate() {
        push_line(&mut emitter, idx + 1, line.as_ref());
    }

    emitter.finish()
}

fn push_line(emitter: &mut Emitter, number: usize, text: &str) {
    let kind = classify_line(text);
    log::trace!("line {number}: {kind:?}");
    emitter.push(kind);
}

/// Joins fragments with `\n`. There is no newline after the last fragment.
pub fn join_fragments(fragments: &[String]) -> String {
    fragments.join("\n")
}

pub fn markdown_to_html(markdown: &str) -> String {
    join_fragments(&convert_lines(markdown.lines()))
}

pub fn convert_from_reader<R: BufRead>(reader: &mut R) -> std::io::Result<HtmlFragments> {
    let lines = read_lines(reader)?;
    Ok(convert_records(&lines))
}

/// Converts the file at `path`.
///
/// Fails with [`ConvertError::MissingInput`] unless `path` is an existing
/// regular file.
pub fn convert_from_path(path: &Path) -> ConvertResult<HtmlFragments> {
    let lines = read_input(path)?;
    Ok(convert_records(&lines))
}

/// Converts `input` and writes the HTML to `output`.
///
/// `output` is only touched once the whole input has been read and converted.
pub fn convert_file(input: &Path, output: &Path) -> ConvertResult<ConversionSummary> {
    let lines = read_input(input)?;
    let fragments = convert_records(&lines);
    fs::write_output(output, &join_fragments(&fragments))?;

    let summary = ConversionSummary {
        lines: lines.len(),
        fragments: fragments.len(),
    };
    log::info!(
        "converted {} into {} ({} lines, {} fragments)",
        input.display(),
        output.display(),
        summary.lines,
        summary.fragments
    );
    Ok(summary)
}

fn read_input(path: &Path) -> ConvertResult<Vec<LineRecord>> {
    if !path.is_file() {
        return Err(ConvertError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|err| ConvertError::io(path, err))?;
    let mut reader = BufReader::new(file);
    let lines = read_lines(&mut reader).map_err(|err| ConvertError::io(path, err))?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

fn convert_records(lines: &[LineRecord]) -> HtmlFragments {
    let mut emitter = Emitter::new();

    for line in lines {
        push_line(&mut emitter, line.number, &line.text);
    }

    emitter.finish()
}
