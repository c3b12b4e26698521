//! Load the quarterly projection table from the source workbook or a CSV export

use calamine::{open_workbook, Data, Reader, Xlsx};
use log::{debug, warn};
use std::path::Path;

use super::QuarterRecord;
use crate::error::WebfleetError;

/// Sheet holding the projection table in the source workbook
pub const PROJECTION_SHEET: &str = "Projection trimestrielle";

/// Column headers, treated as exact string keys
pub const COL_QUARTER: &str = "Trimestre";
pub const COL_VEHICLES: &str = "Cumul véhicules";
pub const COL_REVENUE_ZAR: &str = "CA Total (ZAR)";
pub const COL_NET_RESULT_ZAR: &str = "Résultat net (ZAR)";
pub const COL_CASH_FCFA: &str = "Cumul Cash (FCFA)";

/// Positions of the required columns within a header row
struct ColumnMap {
    quarter: usize,
    vehicles: usize,
    revenue_zar: usize,
    net_result_zar: usize,
    cash_fcfa: usize,
}

fn resolve_columns(headers: &[String]) -> Result<ColumnMap, WebfleetError> {
    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| WebfleetError::MissingColumn {
                column: column.to_string(),
            })
    };

    Ok(ColumnMap {
        quarter: find(COL_QUARTER)?,
        vehicles: find(COL_VEHICLES)?,
        revenue_zar: find(COL_REVENUE_ZAR)?,
        net_result_zar: find(COL_NET_RESULT_ZAR)?,
        cash_fcfa: find(COL_CASH_FCFA)?,
    })
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn numeric_cell(row: &[Data], col: usize, column: &str, row_number: usize) -> Result<f64, WebfleetError> {
    row.get(col)
        .and_then(cell_to_f64)
        .ok_or_else(|| WebfleetError::BadCell {
            row: row_number,
            column: column.to_string(),
        })
}

/// Load the projection table from the `Projection trimestrielle` sheet
/// of an xlsx workbook.
///
/// A missing file, sheet, or column is a fatal load error; blank trailing
/// rows are skipped.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<QuarterRecord>, WebfleetError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| WebfleetError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;

    if !workbook.sheet_names().iter().any(|s| s == PROJECTION_SHEET) {
        return Err(WebfleetError::MissingSheet {
            sheet: PROJECTION_SHEET.to_string(),
        });
    }

    let range = workbook.worksheet_range(PROJECTION_SHEET)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let columns = resolve_columns(&headers)?;

    let mut quarters = Vec::new();
    for (idx, row) in rows.enumerate() {
        // Row number as a spreadsheet user would count it (header is row 1)
        let row_number = idx + 2;

        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let vehicles = numeric_cell(row, columns.vehicles, COL_VEHICLES, row_number)?;
        if vehicles < 0.0 {
            return Err(WebfleetError::BadCell {
                row: row_number,
                column: COL_VEHICLES.to_string(),
            });
        }

        quarters.push(QuarterRecord {
            quarter_label: row
                .get(columns.quarter)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            cumulative_vehicles: vehicles.round() as u32,
            revenue_zar: numeric_cell(row, columns.revenue_zar, COL_REVENUE_ZAR, row_number)?,
            net_result_zar: numeric_cell(
                row,
                columns.net_result_zar,
                COL_NET_RESULT_ZAR,
                row_number,
            )?,
            cumulative_cash_fcfa: numeric_cell(row, columns.cash_fcfa, COL_CASH_FCFA, row_number)?,
        });
    }

    debug!(
        "loaded {} quarters from {} ({})",
        quarters.len(),
        path.display(),
        PROJECTION_SHEET
    );
    warn_if_fleet_shrinks(&quarters);

    Ok(quarters)
}

/// Raw CSV row with the workbook's column headers
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Trimestre")]
    quarter_label: String,
    #[serde(rename = "Cumul véhicules")]
    cumulative_vehicles: u32,
    #[serde(rename = "CA Total (ZAR)")]
    revenue_zar: f64,
    #[serde(rename = "Résultat net (ZAR)")]
    net_result_zar: f64,
    #[serde(rename = "Cumul Cash (FCFA)")]
    cumulative_cash_fcfa: f64,
}

impl From<CsvRow> for QuarterRecord {
    fn from(row: CsvRow) -> Self {
        QuarterRecord {
            quarter_label: row.quarter_label,
            cumulative_vehicles: row.cumulative_vehicles,
            revenue_zar: row.revenue_zar,
            net_result_zar: row.net_result_zar,
            cumulative_cash_fcfa: row.cumulative_cash_fcfa,
        }
    }
}

/// Load the projection table from a CSV export with the same column headers
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<QuarterRecord>, WebfleetError> {
    let reader = csv::Reader::from_path(path)?;
    collect_csv(reader)
}

/// Load the projection table from any reader (e.g. a string buffer)
pub fn load_csv_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<QuarterRecord>, WebfleetError> {
    collect_csv(csv::Reader::from_reader(reader))
}

fn collect_csv<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<QuarterRecord>, WebfleetError> {
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    resolve_columns(&headers)?;

    let mut quarters = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        quarters.push(row.into());
    }

    warn_if_fleet_shrinks(&quarters);
    Ok(quarters)
}

/// The fleet only grows in this model; a shrinking count is a data-quality
/// signal, not a load failure.
fn warn_if_fleet_shrinks(quarters: &[QuarterRecord]) {
    for pair in quarters.windows(2) {
        if pair[1].cumulative_vehicles < pair[0].cumulative_vehicles {
            warn!(
                "fleet count drops from {} ({}) to {} ({})",
                pair[0].cumulative_vehicles,
                pair[0].quarter_label,
                pair[1].cumulative_vehicles,
                pair[1].quarter_label,
            );
        }
    }
}
