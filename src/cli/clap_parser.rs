use clap::Parser;

use crate::error::ArgsError;

#[derive(Parser, Debug)]
#[command(
    name = "row_matcher",
    version,
    about = "Remove rows from a CSV that have no key match in a second CSV"
)]
pub struct Cli {
    /// First input CSV: the file whose rows are kept or removed
    #[arg(value_name = "INPUT1")]
    pub input1: String,
    /// Second input CSV: supplies the set of allowed key values
    #[arg(value_name = "INPUT2")]
    pub input2: String,
    /// Output CSV path (parent directories are created as needed)
    #[arg(value_name = "OUTPUT")]
    pub output: String,
    /// Comma-separated key column names, e.g. `--keys id` or `--keys name,email`
    #[arg(short = 'k', long = "keys", value_name = "COLUMNS")]
    pub keys: String,
}

/// Validated run arguments.
#[derive(Debug, Clone)]
pub struct MatchArgs {
    pub input1: String,
    pub input2: String,
    pub output: String,
    pub key_columns: Vec<String>,
}

impl Cli {
    pub fn into_match_args(self) -> Result<MatchArgs, ArgsError> {
        let key_columns = parse_key_list(&self.keys)?;
        Ok(MatchArgs {
            input1: self.input1,
            input2: self.input2,
            output: self.output,
            key_columns,
        })
    }
}

/// Split a `--keys` value on commas, trimming each name and dropping empties.
fn parse_key_list(raw: &str) -> Result<Vec<String>, ArgsError> {
    let keys: Vec<String> = raw
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keys.is_empty() {
        return Err(ArgsError::EmptyKeys);
    }
    Ok(keys)
}
