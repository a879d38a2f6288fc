//! 統合テスト共通ヘルパー

#![allow(dead_code)]

use club_geocoder::config::Config;
use club_geocoder::geocoder::{GeocodeResult, Geocoder};
use rust_xlsxwriter::Workbook;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// 呼び出しを記録するテスト用ジオコーダ
///
/// 登録のない住所は "No result" を返す。
#[derive(Default)]
pub struct FakeGeocoder {
    responses: HashMap<String, GeocodeResult>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, result: GeocodeResult) -> Self {
        self.responses.insert(address.to_string(), result);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Geocoder for FakeGeocoder {
    async fn geocode(&self, address: &str) -> GeocodeResult {
        self.calls.borrow_mut().push(address.to_string());
        self.responses
            .get(address)
            .cloned()
            .unwrap_or_else(|| GeocodeResult::unresolved("No result"))
    }
}

/// 待機なしのテスト用設定
pub fn test_config(dir: &Path) -> Config {
    Config {
        request_delay: Duration::ZERO,
        ..Config::in_dir(dir)
    }
}

/// ヘッダー＋文字列セルのExcelを作成（空文字のセルは書き込まない）
pub fn write_workbook(path: &Path, header: &[&str], rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).expect("ヘッダー書き込み失敗");
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet
                    .write_string((r + 1) as u32, col as u16, *value)
                    .expect("セル書き込み失敗");
            }
        }
    }

    workbook.save(path).expect("Excel保存失敗");
}

/// CLUB/ADDRESS の2列Excelを作成
pub fn write_clubs(path: &Path, rows: &[(&str, &str)]) {
    let rows: Vec<[&str; 2]> = rows.iter().map(|(c, a)| [*c, *a]).collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    write_workbook(path, &["CLUB", "ADDRESS"], &rows);
}
