//! Validate CPF/CNPJ numbers and format money amounts from the shell.
//!
//! Argument parsing and command logic live in `domain_primitives::cli`; this
//! binary only wires configuration, tracing and output.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use domain_primitives::cli::{CliArgs, Report, run};
use domain_primitives::config::PrimitivesSettings;
use domain_primitives::telemetry::init_tracing;
use ortho_config::OrthoConfig;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let settings = match PrimitivesSettings::load_from_iter([OsString::from("primitives-check")]) {
        Ok(settings) => settings,
        Err(err) => {
            write_error(&format!("failed to load configuration: {err}"));
            return ExitCode::FAILURE;
        }
    };
    init_tracing(settings.json_logs);

    match run(&args.command, &settings) {
        Ok(report) => {
            write_report(&report);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            write_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn write_report(report: &Report) {
    let mut out = io::stdout().lock();
    for line in report.lines() {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}

fn write_error(message: &str) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
        drop(write_err);
    }
}
