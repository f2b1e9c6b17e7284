//! rigo: a line-oriented KaTeX rendering filter.
//!
//! The binary reads TeX expressions from stdin, one per line, and writes one
//! tagged record per line to stdout: `1` followed by the rendered HTML when
//! KaTeX accepts the expression, `0` followed by the original text when it
//! does not. Embedded line breaks are collapsed so every record stays on a
//! single physical line, and the process exits cleanly when stdin closes.
//!
//! The [`filter`] module owns the streaming protocol, [`render`] the KaTeX
//! capability behind a substitutable trait, [`config`] the command-line
//! surface, and [`telemetry`] the tracing setup (stderr only; stdout belongs
//! to the protocol).

pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod telemetry;
