//! クラブ所在地Excel → clubs.json 変換
//!
//! Nominatimで住所をジオコーディングし、結果をキャッシュしながら
//! clubs.json・geocode_report.csv・geocode_cache.json を書き出す。

pub mod config;
pub mod error;
pub mod export;
pub mod geocoder;
pub mod normalizer;
pub mod pipeline;
pub mod spreadsheet;
