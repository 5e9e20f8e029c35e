use core_types::TableKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open the {table} dataset at {path}: {source}")]
    Open {
        table: TableKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read the {table} dataset: {source}")]
    Csv { table: TableKind, source: csv::Error },

    #[error("The {table} dataset is missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        table: TableKind,
        columns: Vec<String>,
    },

    #[error("The {table} dataset is empty or has no header row.")]
    EmptyFile { table: TableKind },
}
