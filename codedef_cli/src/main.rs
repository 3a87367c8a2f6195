//! # codedef
//!
//! Command-line lookup of structural design code identifiers.
//!
//! ```text
//! codedef families
//! codedef list steel
//! codedef show src 1
//! codedef check concrete 105        # exit status 1
//! codedef --locale ru show steel Sp16_13330_2017
//! codedef settings init project-codes.json
//! codedef settings set project-codes.json steel AISC-LRFD93
//! ```

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use codedef_core::CodeError;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codedef_core={0},codedef_cli={0}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            if cli.global.json {
                if let Some(code_err) = err.downcast_ref::<CodeError>() {
                    let body = serde_json::json!({
                        "error": code_err.error_code(),
                        "message": format!("{:#}", err),
                        "details": code_err,
                    });
                    println!("{}", body);
                }
            }
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
