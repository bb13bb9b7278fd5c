// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI that converts a font into a bit-packed bitmap font for microcontrollers.
//! It writes a C header (or Rust module) holding the packed glyphs, the `BitmapFont.h`
//! declarations it depends on, and a preview image of every converted glyph.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use fontpack_gen::{Config, Error, run};

fn main() -> ExitCode {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    match run(&config) {
        Ok(report) => {
            if config.stdout {
                print!("{}", report.header);
            }
            if !report.skipped.is_empty() {
                let skipped: Vec<String> = report
                    .skipped
                    .iter()
                    .map(|cp| format!("U+{cp:04X}"))
                    .collect();
                log::warn!("left out {}", skipped.join(", "));
            }
            ExitCode::SUCCESS
        }
        Err(Error::Config(err)) => {
            let mut command = Config::command();
            eprintln!("error: {err}\n\n{}", command.render_usage());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
