//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use roster::{BorderStyle, Locale, OutputMode};

/// Browse JSON records as a searchable, filterable, paginated table.
#[derive(Debug, Parser)]
#[command(name = "roster", version)]
pub struct Cli {
    /// JSON file holding an array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// View configuration (.yaml, .yml or .json); columns are taken from
    /// the first record when absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Free-text search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter selection as KEY=VALUE (repeatable)
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Records per page, overriding the configuration
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Display language (en, fr)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Output format [default: term on a terminal, text otherwise]
    #[arg(long)]
    pub format: Option<OutputMode>,

    /// Table border, overriding the configuration
    #[arg(long)]
    pub border: Option<BorderStyle>,

    /// Table width [default: terminal width]
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Activate the Nth row of the page and print its record as JSON
    #[arg(long, value_name = "N")]
    pub select: Option<usize>,

    /// Render the loading placeholder instead of the records
    #[arg(long)]
    pub loading: bool,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing filter key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
