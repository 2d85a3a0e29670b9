use std::ffi::OsString;

use clap::Parser;

use bytesize::FormatSpec;

use crate::cli::Args;

#[derive(Debug)]
pub struct Config {
    pub values: Vec<String>,
    pub spec: FormatSpec,
    pub mode: OutputMode,
    pub summary: bool,
    pub no_errors: bool,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(itr)?;
        log::debug!("parsed {:?}", args);
        args.try_into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One formatted value per line.
    Lines,
    /// Every suffix form side by side.
    Table,
}
