//! Fixed-layout KPI report artifact
//!
//! A single page: one title line, three label/value lines. No charts,
//! no investor table; the export scope is the KPI triplet only.

use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::WebfleetError;
use crate::simulation::KpiSummary;

/// Deterministic artifact name offered for download
pub const DEFAULT_REPORT_NAME: &str = "rapport_webfleet.txt";

/// Fixed report title line
pub const REPORT_TITLE: &str = "Rapport de Simulation Webfleet Cameroun";

/// The three KPI values already formatted as display strings
#[derive(Debug, Clone, PartialEq)]
pub struct KpiReport {
    pub total_revenue: String,
    pub total_net_result: String,
    pub roi: String,
}

impl KpiReport {
    pub fn from_summary(kpis: &KpiSummary) -> Self {
        Self {
            total_revenue: format!("CA total (FCFA): {}", format_fcfa(kpis.total_revenue_fcfa)),
            total_net_result: format!(
                "Resultat net (FCFA): {}",
                format_fcfa(kpis.total_net_result_fcfa)
            ),
            roi: format!("ROI cumulé: {:.2}", kpis.roi),
        }
    }

    /// Render the single-page layout
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n{}\n{}\n",
            REPORT_TITLE, self.total_revenue, self.total_net_result, self.roi
        )
    }

    /// Write the artifact. Failure is recoverable: the caller surfaces
    /// the message and the rest of the dashboard state is untouched.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), WebfleetError> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        info!("KPI report written to {}", path.display());
        Ok(())
    }
}

/// Thousands-separated whole-amount display, e.g. `4,719,000`.
///
/// The fractional part is rounded away; negative amounts keep their sign.
pub fn format_fcfa(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_kpis() -> KpiSummary {
        KpiSummary {
            total_revenue_fcfa: 16_863_000.0,
            total_net_result_fcfa: 330_000.0,
            roi: 330_000.0 / 4_719_000.0,
        }
    }

    #[test]
    fn test_format_fcfa_grouping() {
        assert_eq!(format_fcfa(0.0), "0");
        assert_eq!(format_fcfa(999.0), "999");
        assert_eq!(format_fcfa(1_000.0), "1,000");
        assert_eq!(format_fcfa(4_719_000.0), "4,719,000");
        assert_eq!(format_fcfa(-650_000.0), "-650,000");
        assert_eq!(format_fcfa(1_234_567.6), "1,234,568");
    }

    #[test]
    fn test_report_layout() {
        let report = KpiReport::from_summary(&sample_kpis());
        let rendered = report.render();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Rapport de Simulation Webfleet Cameroun");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "CA total (FCFA): 16,863,000");
        assert_eq!(lines[3], "Resultat net (FCFA): 330,000");
        assert_eq!(lines[4], "ROI cumulé: 0.07");
    }

    #[test]
    fn test_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REPORT_NAME);

        let report = KpiReport::from_summary(&sample_kpis());
        report.write_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, report.render());
    }

    #[test]
    fn test_unwritable_path_is_recoverable_error() {
        let report = KpiReport::from_summary(&sample_kpis());
        let err = report
            .write_to("no_such_directory/rapport_webfleet.txt")
            .unwrap_err();
        assert!(matches!(err, WebfleetError::Export(_)));
    }
}
