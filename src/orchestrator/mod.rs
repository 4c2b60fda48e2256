//! End-to-end run orchestration: load, validate, filter, write, summarize.

pub mod summary;

use anyhow::{Result, bail};
use chrono::Utc;
use log::info;

use crate::cli::MatchArgs;
use crate::csv_io;
use crate::error::ValidationError;
use crate::matching;
use crate::table::Table;

use summary::RunSummary;

/// Run the whole filter: read both inputs, validate key columns, keep the
/// rows of input 1 whose keys appear in input 2, and write the result.
///
/// Console labels follow the original tool: input 1 is printed as "reference"
/// and input 2 as "comparison", even though input 1 is the file being filtered
/// and input 2 supplies the allowed key set.
pub fn run(args: &MatchArgs) -> Result<RunSummary> {
    let started_utc = Utc::now();

    info!("Reading input files");
    info!("  Input 1 (reference): {}", args.input1);
    info!("  Input 2 (comparison): {}", args.input2);
    info!("  Primary key columns: [{}]", args.key_columns.join(", "));

    let primary = csv_io::read_csv(&args.input1)?;
    let reference = csv_io::read_csv(&args.input2)?;

    info!("Input file statistics:");
    info!(
        "  {}: {} rows, {} columns",
        args.input1,
        primary.row_count(),
        primary.column_count()
    );
    info!(
        "  {}: {} rows, {} columns",
        args.input2,
        reference.row_count(),
        reference.column_count()
    );

    let mut failures = Vec::new();
    for (table, path) in [(&primary, &args.input1), (&reference, &args.input2)] {
        if let Err(e) = validate_key_columns(table, &args.key_columns, path) {
            failures.push(e.to_string());
        }
    }
    if !failures.is_empty() {
        bail!("column validation failed:\n  {}", failures.join("\n  "));
    }

    info!("Matching rows based on primary keys");
    let matched = matching::filter_matching(&primary, &reference, &args.key_columns)?;
    csv_io::write_csv(&matched, &args.output)?;

    Ok(RunSummary {
        input1: args.input1.clone(),
        input2: args.input2.clone(),
        output: args.output.clone(),
        primary_rows: primary.row_count(),
        primary_columns: primary.column_count(),
        reference_rows: reference.row_count(),
        reference_columns: reference.column_count(),
        kept_rows: matched.row_count(),
        started_utc,
        ended_utc: Utc::now(),
    })
}

/// Check that every requested key column exists in `table`, reporting the full
/// missing list and the full available list on failure.
pub fn validate_key_columns(
    table: &Table,
    key_columns: &[String],
    path: &str,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = key_columns
        .iter()
        .filter(|name| !table.has_column(name))
        .cloned()
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(ValidationError::MissingColumns {
        path: path.to_string(),
        missing,
        available: table.columns().to_vec(),
    })
}
