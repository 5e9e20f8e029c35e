use crate::error::DatasetError;
use crate::raw::{RawDistrictRow, RawTransactionRow, RawUserDeviceRow, SourceRow};
use crate::store::Datasets;
use configuration::DatasetSettings;
use core_types::{Table, TableKind};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

/// Only this many row warnings are logged individually per table.
const MAX_LOGGED_WARNINGS: usize = 5;

/// A row that was dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    pub line: u64,
    pub message: String,
}

/// What happened while one table was read.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub table: TableKind,
    pub rows: usize,
    pub skipped_rows: usize,
    pub warnings: Vec<RowWarning>,
}

#[derive(Debug)]
pub struct LoadedTable<R> {
    pub table: Table<R>,
    pub report: LoadReport,
}

/// Loads all three tables described by `settings`.
///
/// Any missing or unreadable file aborts the load. Rows with unparsable
/// numeric fields are skipped and reported.
#[tracing::instrument(level = "info", skip(settings), fields(data_dir = %settings.data_dir.display()))]
pub fn load_datasets(settings: &DatasetSettings) -> Result<Datasets, DatasetError> {
    let start = Instant::now();
    let delimiter = settings.delimiter_byte();

    let transactions =
        load_table::<RawTransactionRow>(&settings.transactions_path(), delimiter)?;
    let districts = load_table::<RawDistrictRow>(&settings.districts_path(), delimiter)?;
    let user_devices =
        load_table::<RawUserDeviceRow>(&settings.user_devices_path(), delimiter)?;

    tracing::info!(elapsed = ?start.elapsed(), "All datasets loaded.");
    Ok(Datasets::new(transactions, districts, user_devices))
}

/// Opens `path` and reads it as a table of `S` rows.
pub fn load_table<S: SourceRow>(path: &Path, delimiter: u8) -> Result<Table<S::Record>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        table: S::TABLE,
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_table::<S, _>(BufReader::new(file), delimiter)?;
    log_report(&loaded.report, path);
    Ok(loaded.table)
}

/// Core reading logic. Accepts any `Read` source, useful for tests.
pub fn read_table<S: SourceRow, R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<LoadedTable<S::Record>, DatasetError> {
    let csv_err = |source| DatasetError::Csv {
        table: S::TABLE,
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();
    if headers.iter().all(str::is_empty) {
        return Err(DatasetError::EmptyFile { table: S::TABLE });
    }

    let missing: Vec<String> = S::REQUIRED
        .iter()
        .filter(|&&col| !headers.iter().any(|h| h == col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns {
            table: S::TABLE,
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        // +2: one for the header row, one for 1-based numbering.
        let fallback_line = idx as u64 + 2;
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(csv_err(err)),
            Err(err) => {
                warnings.push(RowWarning {
                    line: fallback_line,
                    message: err.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map_or(fallback_line, |p| p.line());

        let parsed = record
            .deserialize::<S>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(S::normalize);
        match parsed {
            Ok(row) => rows.push(row),
            Err(message) => warnings.push(RowWarning { line, message }),
        }
    }

    let report = LoadReport {
        table: S::TABLE,
        rows: rows.len(),
        skipped_rows: warnings.len(),
        warnings,
    };
    Ok(LoadedTable {
        table: Table::new(rows),
        report,
    })
}

fn log_report(report: &LoadReport, path: &Path) {
    tracing::info!(
        table = %report.table,
        path = %path.display(),
        rows = report.rows,
        skipped = report.skipped_rows,
        "Loaded dataset."
    );
    for warning in report.warnings.iter().take(MAX_LOGGED_WARNINGS) {
        tracing::warn!(table = %report.table, line = warning.line, "Skipped row: {}", warning.message);
    }
    if report.warnings.len() > MAX_LOGGED_WARNINGS {
        tracing::warn!(
            table = %report.table,
            "{} more rows skipped.",
            report.warnings.len() - MAX_LOGGED_WARNINGS
        );
    }
}
