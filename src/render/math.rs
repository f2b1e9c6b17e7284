use katex::{OptsBuilder, OutputType};

use crate::config::{OutputFormat, RenderSettings};

use super::{RenderError, Renderer};

/// KaTeX-backed renderer producing one HTML fragment per TeX expression.
pub struct KatexRenderer {
    display_mode: bool,
    output_type: OutputFormat,
}

impl KatexRenderer {
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            display_mode: settings.display_mode,
            output_type: settings.output_type,
        }
    }

    fn output_type(&self) -> OutputType {
        match self.output_type {
            OutputFormat::Html => OutputType::Html,
            OutputFormat::Mathml => OutputType::Mathml,
            OutputFormat::HtmlAndMathml => OutputType::HtmlAndMathml,
        }
    }
}

impl Renderer for KatexRenderer {
    fn render(&self, source: &str) -> Result<String, RenderError> {
        let mut builder = OptsBuilder::default();
        builder.display_mode(self.display_mode);
        builder.output_type(self.output_type());

        let opts = builder.build().map_err(|err| RenderError::Options {
            message: format!("failed to build KaTeX options: {err}"),
        })?;

        katex::render_with_opts(source, opts).map_err(|err| RenderError::Render {
            message: format!("KaTeX rendering failed: {err}"),
        })
    }
}
