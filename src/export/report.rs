//! geocode_report.csv 出力
//!
//! スキップ行も含めて入力1行につき1行。列順は固定:
//! `row,club,address,status,lat,lng`

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub row: usize,
    pub club: String,
    pub address: String,
    pub status: String,
    /// 未解決なら空文字
    pub lat: String,
    pub lng: String,
}

impl ReportRow {
    pub fn new(
        row: usize,
        club: &str,
        address: &str,
        status: &str,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Self {
        Self {
            row,
            club: club.to_string(),
            address: address.to_string(),
            status: status.to_string(),
            lat: format_coordinate(lat),
            lng: format_coordinate(lng),
        }
    }
}

/// clubs.json と同じ表記（整数値も `-93.0` のように小数点付き）
fn format_coordinate(value: Option<f64>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}

/// レポートCSVを書き出す（ヘッダー行付き）
pub fn write_report_csv(rows: &[ReportRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    // 行が0件でもヘッダーは出す
    wtr.write_record(["row", "club", "address", "status", "lat", "lng"])?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
