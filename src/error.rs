use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("--keys requires at least one non-empty column name")]
    EmptyKeys,
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot open file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot create output file {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("read error in {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("write error in {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "columns [{}] not found in {path}; available columns: [{}]",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        path: String,
        missing: Vec<String>,
        available: Vec<String>,
    },
}
