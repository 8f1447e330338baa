//! `roster`: browse a JSON file of records from the command line.
//!
//! ```text
//! roster --data students.json --config students.yaml -s ali -f role=STUDENT --page 2
//! ```
//!
//! A data file that cannot be read or parsed is reported through the view's
//! failed panel, and the process exits with a failure status.

mod args;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use roster::{
    render_output, ColumnConfig, DataView, OutputMode, ViewConfig, ViewPhase, ViewState,
};
use serde_json::Value;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::args::Cli;

const DEFAULT_WIDTH: usize = 80;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("warning: logging is unavailable");
    }

    match run(&cli) {
        Ok(ViewPhase::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Renders the requested frame and returns the phase it showed.
fn run(cli: &Cli) -> Result<ViewPhase> {
    let mut config = match &cli.config {
        Some(path) => ViewConfig::from_path(path)
            .with_context(|| format!("cannot use view config {}", path.display()))?,
        None => ViewConfig::default(),
    };
    if let Some(size) = cli.page_size {
        config.page_size = Some(size);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(border) = cli.border {
        config.border = border;
    }

    let (data, load_error) = match load_records(&cli.data) {
        Ok(data) => (data, None),
        Err(err) => {
            log::error!("{:#}", err);
            (Vec::new(), Some(format!("{:#}", err)))
        }
    };

    if config.columns.is_empty() {
        config.columns = infer_columns(&data);
        log::info!("inferred {} columns from the first record", config.columns.len());
    }

    let mut view = DataView::from_config(&config)?
        .loading(cli.loading)
        .on_row_click(|record: &Value| match serde_json::to_string_pretty(record) {
            Ok(json) => println!("{}", json),
            Err(err) => log::error!("cannot print selected record: {}", err),
        });
    view.set_load_error(load_error);

    let state = build_state(cli);
    let model = view.render(&data, &state);

    if let Some(n) = cli.select {
        let Some(row) = n.checked_sub(1).and_then(|i| model.rows.get(i)) else {
            bail!("no row {} on page {} ({} shown)", n, state.page(), model.rows.len());
        };
        view.activate(row);
        return Ok(model.phase);
    }

    let mode = cli.format.unwrap_or_else(|| {
        if console::Term::stdout().is_term() {
            OutputMode::Term
        } else {
            OutputMode::Text
        }
    });
    let width = cli.width.or_else(terminal_width).unwrap_or(DEFAULT_WIDTH);
    let output = render_output(&model, mode, &config.text_options(width))?;
    println!("{}", output);

    Ok(model.phase)
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

fn build_state(cli: &Cli) -> ViewState {
    let mut state = ViewState::new();
    if let Some(term) = &cli.search {
        state = state.with_search(term.clone());
    }
    for (key, value) in &cli.filters {
        state = state.with_filter(key.as_str(), value.clone());
    }
    state.with_page(cli.page)
}

/// Reads a JSON array of records.
fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    match value {
        Value::Array(records) => {
            log::debug!("loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        other => bail!(
            "{} must hold an array of records, found {}",
            path.display(),
            kind(&other)
        ),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One column per top-level key of the first object record.
fn infer_columns(data: &[Value]) -> Vec<ColumnConfig> {
    let Some(Value::Object(first)) = data.first() else {
        return Vec::new();
    };
    first
        .keys()
        .map(|key| ColumnConfig {
            key: key.as_str().into(),
            label: None,
            width: None,
            align: None,
            truncate: None,
        })
        .collect()
}
