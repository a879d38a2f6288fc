//! clubs.json 出力

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 地図に載せるクラブ1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl ClubRecord {
    pub fn is_missing_coordinates(&self) -> bool {
        self.lat.is_none() || self.lng.is_none()
    }
}

/// クラブ一覧をJSON配列（整形済み）として書き出す
pub fn write_clubs_json(clubs: &[ClubRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, clubs)?;
    writer.flush()?;
    Ok(())
}
