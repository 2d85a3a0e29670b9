mod cli;
mod config;
mod entry;
mod input;
mod output;

use std::io;

use anyhow::Context;

use crate::{
    config::{Config, OutputMode},
    output::{errors::print_errors, print_lines, summary::print_summary, table::print_table},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Help, version and usage errors are printed by clap itself.
    let config = match Config::parse(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(err) => err.exit(),
            Err(err) => return Err(err),
        },
    };
    log::debug!("using {:?}", config);

    let inputs = if config.values.is_empty() {
        input::read_lines(io::stdin().lock()).context("error reading values from stdin")?
    } else {
        config.values.clone()
    };

    let mut errors = Vec::new();
    let entries = input::parse_entries(inputs, &mut errors);

    match config.mode {
        OutputMode::Lines => print_lines(&entries, &config.spec),
        OutputMode::Table => print_table(&entries),
    }

    if config.summary {
        print_summary(&entries, errors.len(), &config.spec);
    }

    if !errors.is_empty() {
        if config.no_errors {
            for err in &errors {
                log::warn!("{:#}", err);
            }
        } else {
            print_errors(&errors);
        }
    }

    Ok(())
}
