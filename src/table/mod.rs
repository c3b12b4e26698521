//! Quarterly projection table structures and spreadsheet loading

mod data;
pub mod loader;

pub use data::QuarterRecord;
pub use loader::{load_csv, load_csv_from_reader, load_workbook, PROJECTION_SHEET};
