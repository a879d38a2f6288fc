//! クラブ所在地Excelの読み込み
//!
//! 先頭シートの1行目をヘッダーとして扱い、`CLUB` と `ADDRESS` 列を取り出す。

use crate::error::{ClubGeoError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub const CLUB_COLUMN: &str = "CLUB";
pub const ADDRESS_COLUMN: &str = "ADDRESS";

/// 入力1行分（値は未正規化）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRow {
    /// ヘッダーを除いた0始まりの行番号
    pub row: usize,
    pub club: String,
    pub address: String,
}

/// Excelファイルを読み込んで入力行を返す
pub fn read_club_rows(path: &Path) -> Result<Vec<InputRow>> {
    if !path.exists() {
        return Err(ClubGeoError::InputNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ClubGeoError::EmptyWorkbook(path.display().to_string()))??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();

    let club_idx = header.iter().position(|h| h == CLUB_COLUMN);
    let address_idx = header.iter().position(|h| h == ADDRESS_COLUMN);
    let (Some(club_idx), Some(address_idx)) = (club_idx, address_idx) else {
        return Err(ClubGeoError::MissingColumns(header));
    };

    let input_rows = rows
        .enumerate()
        .map(|(row, cells)| InputRow {
            row,
            club: cells.get(club_idx).map(cell_text).unwrap_or_default(),
            address: cells.get(address_idx).map(cell_text).unwrap_or_default(),
        })
        .collect();

    Ok(input_rows)
}

/// セルを文字列化（空セルは空文字）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
