//! Configuration layer: typed settings resolved from environment and CLI flags.

use std::str::FromStr;

use clap::{Parser, ValueEnum, builder::BoolishValueParser};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Command-line arguments for the rigo binary.
#[derive(Debug, Parser)]
#[command(name = "rigo", version, about = "Line-oriented KaTeX rendering filter")]
pub struct CliArgs {
    /// Render expressions in display (block) style instead of inline style.
    #[arg(long = "display-mode", action = clap::ArgAction::SetTrue)]
    pub display_mode: bool,

    /// Markup flavour emitted for successfully rendered expressions.
    #[arg(
        long = "output-type",
        value_enum,
        default_value = "html",
        value_name = "FORMAT"
    )]
    pub output_type: OutputFormat,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", env = "RIGO_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub render: RenderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSettings {
    pub display_mode: bool,
    pub output_type: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Markup flavour passed through to KaTeX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Mathml,
    HtmlAndMathml,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Resolve settings from parsed arguments. Environment overrides flow in
/// through clap's `env` attributes; there is no configuration file.
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let level = match &cli.log_level {
        Some(level) => LevelFilter::from_str(level.as_str())
            .map_err(|err| LoadError::invalid("log-level", format!("failed to parse: {err}")))?,
        None => DEFAULT_LOG_LEVEL,
    };

    let format = if cli.log_json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(Settings {
        render: RenderSettings {
            display_mode: cli.display_mode,
            output_type: cli.output_type,
        },
        logging: LoggingSettings { level, format },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_the_protocol_contract() {
        let args = CliArgs::parse_from(["rigo"]);
        let settings = load(&args).expect("valid settings");

        assert!(!settings.render.display_mode);
        assert_eq!(settings.render.output_type, OutputFormat::Html);
        assert_eq!(settings.logging.level, LevelFilter::WARN);
        assert!(matches!(settings.logging.format, LogFormat::Compact));
    }

    #[test]
    fn parse_render_flags() {
        let args = CliArgs::parse_from([
            "rigo",
            "--display-mode",
            "--output-type",
            "html-and-mathml",
        ]);
        let settings = load(&args).expect("valid settings");

        assert!(settings.render.display_mode);
        assert_eq!(settings.render.output_type, OutputFormat::HtmlAndMathml);
    }

    #[test]
    fn log_level_override_takes_effect() {
        let args = CliArgs::parse_from(["rigo", "--log-level", "debug"]);
        let settings = load(&args).expect("valid settings");
        assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let args = CliArgs::parse_from(["rigo", "--log-level", "chatty"]);
        let err = load(&args).expect_err("level should not parse");
        assert!(matches!(
            err,
            LoadError::Invalid {
                key: "log-level",
                ..
            }
        ));
    }

    #[test]
    fn cli_json_logging_enforces_format() {
        let args = CliArgs::parse_from(["rigo", "--log-json", "true"]);
        let settings = load(&args).expect("valid settings");
        assert!(matches!(settings.logging.format, LogFormat::Json));
    }
}
