use clap::Parser;

use bytesize::{Flag, FormatSpec, SpecError, Verb};

use crate::config::{Config, OutputMode};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Byte counts such as 1536, -42, 1_000_000 or 1256<<50. Read one per
    /// line from stdin when none are given.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Printf-style specifier, e.g. "%-8.2v", "%#v" or "%x".
    #[arg(
        name = "format",
        long = "format",
        short = 'f',
        conflicts_with_all = vec!["precision", "width", "left", "debug"]
    )]
    pub format: Option<String>,

    /// Suffix form: 0 "K", 1 "K" with "B" for bytes, 2 "KB", 3 "KiB".
    #[arg(
        name = "precision",
        long = "precision",
        short = 'p',
        allow_negative_numbers = true
    )]
    pub precision: Option<i64>,
    #[arg(name = "width", long = "width", short = 'w')]
    pub width: Option<usize>,
    #[arg(name = "left", long = "left", short = 'l', requires = "width")]
    pub left: bool,
    /// Print ByteSize(<n>) instead of the human-readable form.
    #[arg(name = "debug", long = "debug")]
    pub debug: bool,

    /// Show every suffix form side by side.
    #[arg(
        name = "table",
        long = "table",
        short = 't',
        conflicts_with_all = vec!["format", "precision", "debug"]
    )]
    pub table: bool,
    #[arg(name = "summary", long = "summary", short = 's')]
    pub summary: bool,
    #[arg(
        name = "no-errors",
        long = "no-errors",
        aliases = vec!["no-error", "no-errs", "no-err", "noerrors", "noerror", "noerrs", "noerr"]
    )]
    pub no_errors: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let spec = match self.format {
            Some(format) => format.parse::<FormatSpec>()?,
            None => make_spec(self.precision, self.width, self.left, self.debug)?,
        };

        let mode = if self.table {
            OutputMode::Table
        } else {
            OutputMode::Lines
        };

        Ok(Config {
            values: self.values,
            spec,
            mode,
            summary: self.summary,
            no_errors: self.no_errors,
        })
    }
}

fn make_spec(
    precision: Option<i64>,
    width: Option<usize>,
    left: bool,
    debug: bool,
) -> Result<FormatSpec, SpecError> {
    let mut spec = FormatSpec::new(Verb::Value);
    if debug {
        spec = spec.with_flag(Flag::Alternate);
    }
    if left {
        spec = spec.with_flag(Flag::Minus);
    }
    if let Some(width) = width {
        spec = spec.with_width(width)?;
    }
    if let Some(precision) = precision {
        spec = spec.with_precision(precision)?;
    }
    Ok(spec)
}
