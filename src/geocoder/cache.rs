//! ジオコーディング結果キャッシュモジュール
//!
//! 正規化済み住所をキーにして結果を保存し、再実行時のAPI呼び出しを省く。
//! 失敗結果もキャッシュされるため、再試行したい場合はファイルを削除する。

use crate::error::Result;
use super::types::GeocodeResult;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// キャッシュファイルの中身（住所 → 結果のJSONオブジェクト）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStore {
    entries: BTreeMap<String, GeocodeResult>,
}

impl CacheStore {
    /// キャッシュファイルを読み込み
    ///
    /// ファイルがない・壊れている場合は空のキャッシュを返す（実行は止めない）。
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Could not open cache {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Self { entries },
            Err(e) => {
                log::warn!("Ignoring unreadable cache {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// キャッシュファイルを保存（既存の内容は上書き）
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.flush()?;
        Ok(())
    }

    /// キャッシュをルックアップ
    pub fn get(&self, address: &str) -> Option<&GeocodeResult> {
        self.entries.get(address)
    }

    /// キャッシュに追加（同じ住所は最新の結果で上書き）
    pub fn insert(&mut self, address: String, result: GeocodeResult) {
        self.entries.insert(address, result);
    }

    /// キャッシュ件数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
