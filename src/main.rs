//! rigo: reads TeX expressions line by line on stdin and writes tagged
//! KaTeX HTML records on stdout until the input stream closes.

use std::{io, process};

use clap::Parser;
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

use rigo::{
    config::{self, CliArgs},
    error::AppError,
    filter,
    render::KatexRenderer,
    telemetry,
};

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();
    let settings = config::load(&args)?;

    telemetry::init(&settings.logging)?;

    let renderer = KatexRenderer::new(&settings.render);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    filter::run(stdin, stdout, &renderer)?;

    Ok(())
}
