//! Standalone KPI report export
//!
//! Loads the projection workbook, recomputes the KPIs with the default
//! simulation parameters, and writes `rapport_webfleet.txt`.

use anyhow::Context;

use webfleet_projection::report::DEFAULT_REPORT_NAME;
use webfleet_projection::DashboardSession;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let workbook = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "App_Webfleet_Projection_FCFA.xlsx".to_string());

    let session = DashboardSession::from_workbook(&workbook)
        .with_context(|| format!("loading workbook {workbook}"))?;

    let report = session
        .export_report(DEFAULT_REPORT_NAME)
        .context("exporting KPI report")?;

    println!("{}", report.render());
    println!("Rapport écrit dans {DEFAULT_REPORT_NAME}");

    Ok(())
}
