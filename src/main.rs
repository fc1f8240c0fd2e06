mod data;
mod error;
mod stats;
mod trim;

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};

use stats::MedianRule;
use trim::Method;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let method = match args.next() {
        Some(arg) => arg
            .parse::<Method>()
            .with_context(|| format!("bad method argument {arg:?}"))?,
        None => Method::Iqr,
    };
    let rule = match args.next() {
        Some(arg) => arg
            .parse::<MedianRule>()
            .with_context(|| format!("bad median rule argument {arg:?}"))?,
        None => MedianRule::default(),
    };
    log::info!("trimming with the {method} method ({rule:?} median rule)");

    prompt();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading from stdin")?;
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        if let Err(e) = process_file(Path::new(path), method, rule) {
            log::error!("{path}: {e:#}");
        }

        println!();
        prompt();
    }

    Ok(())
}

fn prompt() {
    println!("Please enter the path of the CSV file.");
}

/// Load one CSV file and print every column with its outliers removed.
///
/// Any failure aborts this file only; the prompt loop continues.
fn process_file(path: &Path, method: Method, rule: MedianRule) -> Result<()> {
    let table = data::loader::load_csv(path)?;
    if table.is_empty() {
        log::warn!("{}: no columns found", path.display());
        return Ok(());
    }

    for (index, column) in table.columns.iter().enumerate() {
        let trimmed = trim::trim(column, method, rule)
            .with_context(|| format!("trimming column {index}"))?;
        log::info!(
            "column {index}: kept {} of {} value(s)",
            trimmed.len(),
            column.len()
        );
        println!("column {index}: {trimmed:?}");
    }

    Ok(())
}
