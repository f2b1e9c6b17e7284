//! The streaming protocol core: read a line, render it, tag it, keep it on
//! one physical line, write it out. Strict FIFO, exactly one record out per
//! record in, until the input channel ends.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::render::Renderer;

/// Leading byte of a record whose payload is rendered markup.
pub const RENDERED_TAG: char = '1';
/// Leading byte of a record whose payload is the original, unrendered text.
pub const FALLBACK_TAG: char = '0';

/// Result of attempting to render one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The renderer produced a markup fragment for the line.
    Rendered(String),
    /// The renderer rejected the line; the original text is carried instead.
    Fallback(String),
}

/// Fatal channel failures. Render failures are recovered per record and
/// never show up here.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read from the input channel")]
    Read(#[source] std::io::Error),
    #[error("failed to write to the output channel")]
    Write(#[source] std::io::Error),
}

/// Encode an outcome as a single output record: status tag, then payload,
/// with embedded line breaks collapsed so the one-record-per-line framing
/// survives whatever the renderer (or the original text) contains.
pub fn encode_record(outcome: &Outcome) -> String {
    let (tag, payload) = match outcome {
        Outcome::Rendered(markup) => (RENDERED_TAG, markup.as_str()),
        Outcome::Fallback(text) => (FALLBACK_TAG, text.as_str()),
    };

    let mut combined = String::with_capacity(payload.len() + 1);
    combined.push(tag);
    combined.push_str(payload);
    collapse_line_breaks(&combined)
}

/// Replace every `\r\n` pair or bare `\n` with a single space. A carriage
/// return that is not followed by a line feed is left alone.
pub fn collapse_line_breaks(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => collapsed.push(' '),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                collapsed.push(' ');
            }
            other => collapsed.push(other),
        }
    }
    collapsed
}

/// Drive the filter until the input channel reports end-of-stream.
///
/// Every input line produces exactly one output line, in input order. A
/// render failure falls back to the original text under the `0` tag; a
/// channel failure aborts the loop. Each record is flushed as soon as it is
/// written, since callers commonly run the filter as a coprocess and block
/// on one response per request.
pub fn run<R, W>(input: R, mut output: W, renderer: &dyn Renderer) -> Result<(), FilterError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.map_err(FilterError::Read)?;
        let outcome = match renderer.render(&line) {
            Ok(markup) => Outcome::Rendered(markup),
            Err(error) => {
                debug!(error = %error, "renderer rejected line, falling back to source text");
                Outcome::Fallback(line)
            }
        };

        let record = encode_record(&outcome);
        writeln!(output, "{record}").map_err(FilterError::Write)?;
        output.flush().map_err(FilterError::Write)?;
    }

    Ok(())
}
