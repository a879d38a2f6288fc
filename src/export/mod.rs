pub mod json;
pub mod report;

pub use json::{write_clubs_json, ClubRecord};
pub use report::{write_report_csv, ReportRow};

use crate::error::Result;
use std::path::Path;

/// clubs.json とレポートCSVをこの順で書き出す
pub fn export_results(
    clubs: &[ClubRecord],
    report: &[ReportRow],
    output_path: &Path,
    report_path: &Path,
) -> Result<()> {
    write_clubs_json(clubs, output_path)?;
    log::info!("Wrote {} clubs to {}", clubs.len(), output_path.display());

    write_report_csv(report, report_path)?;
    log::info!("Wrote {} report rows to {}", report.len(), report_path.display());

    Ok(())
}
