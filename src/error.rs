//! Error taxonomy for the projection dashboard
//!
//! Load errors are fatal (the dashboard cannot render without the table);
//! arithmetic degeneracies and export failures are recoverable and local
//! to the triggering interaction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebfleetError {
    /// The source workbook could not be opened at all.
    #[error("cannot open workbook {path:?}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// The workbook opened but reading a sheet failed.
    #[error("cannot read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The projection sheet is absent from the workbook.
    #[error("workbook has no sheet named \"{sheet}\"")]
    MissingSheet { sheet: String },

    /// A required column header is absent from the table.
    #[error("projection table is missing column \"{column}\"")]
    MissingColumn { column: String },

    /// A numeric column holds something that is not a number.
    #[error("row {row}: column \"{column}\" does not hold a numeric value")]
    BadCell { row: usize, column: String },

    /// CSV-level read or parse failure.
    #[error("cannot read projection table: {0}")]
    Csv(#[from] csv::Error),

    /// A simulation parameter or calculator input is outside its contract.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// ROI denominator collapsed to zero (exchange rate is zero).
    #[error("cannot compute ROI: invested capital converts to zero at this exchange rate")]
    UndefinedRoi,

    /// Allocation baseline is zero, so ownership shares are undefined.
    #[error("cannot compute allocation: valuation baseline is zero")]
    UndefinedValuation,

    /// The report artifact could not be written.
    #[error("report export failed: {0}")]
    Export(#[from] std::io::Error),
}
