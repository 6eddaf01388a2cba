// src/export/logic.rs

use crate::db::queries::{load_events, load_settings};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{CSV_HEADER, ExportRow, build_rows};
use crate::export::range::{ExportRange, parse_range};
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use csv::QuoteStyle;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered event list.
    ///
    /// - `format`: csv | json
    /// - `file`: output path
    /// - `range`: `None` / `"all"` (everything), `YYYY-MM` (one month),
    ///   `YYYY-MM-DD` (one day)
    ///
    /// An empty filtered result is reported to the user and writes no file.
    pub fn export(
        store: &Store,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        let selector = match range {
            None => ExportRange::All,
            Some(r) => parse_range(r)?,
        };

        let settings = load_settings(store)?;
        let events: Vec<_> = load_events(store)?
            .into_iter()
            .filter(|e| selector.contains(e.timestamp))
            .collect();

        // Nothing to write: report before any file interaction.
        if events.is_empty() {
            warning("No events found for the selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        let rows = build_rows(&events, &settings);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// CSV with a UTF-8 BOM, the unquoted localized header, and every data field
/// double-quoted — byte-compatible with the files the import parsers accept.
fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;
    writeln!(file, "{CSV_HEADER}")?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(file);

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// JSON pretty-printed, same rows as the CSV export.
fn export_json(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
