//! 実行設定
//!
//! CLIフラグ・環境変数は持たない。パスと定数はすべてビルド時に固定され、
//! テストだけが独自の `Config` を組み立てる。

use std::path::PathBuf;
use std::time::Duration;

pub const INPUT_XLSX: &str = "ClubLocations.xlsx";
pub const OUTPUT_JSON: &str = "clubs.json";
pub const OUTPUT_REPORT: &str = "geocode_report.csv";
pub const CACHE_FILE: &str = "geocode_cache.json";

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Nominatim利用規約: アプリ名と連絡先を名乗ること
pub const USER_AGENT: &str =
    "vasa-distance-map (internal demo) - contact: shelby.ingram@vasafitness.com";

/// Nominatim利用規約: 1リクエスト/秒程度に抑える
pub const REQUEST_DELAY: Duration = Duration::from_millis(1100);

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub report_path: PathBuf,
    pub cache_path: PathBuf,
    pub endpoint: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// 実際にAPIを呼んだ後の待機時間（キャッシュヒット時は待たない）
    pub request_delay: Duration,
    /// キャッシュヒット時に元のステータスをそのまま使う
    ///
    /// `false` の場合は常に "OK (cached)" を返す（既存の clubs.json 生成と互換）。
    pub preserve_cached_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_XLSX),
            output_path: PathBuf::from(OUTPUT_JSON),
            report_path: PathBuf::from(OUTPUT_REPORT),
            cache_path: PathBuf::from(CACHE_FILE),
            endpoint: NOMINATIM_URL.into(),
            user_agent: USER_AGENT.into(),
            request_timeout: REQUEST_TIMEOUT,
            request_delay: REQUEST_DELAY,
            preserve_cached_status: false,
        }
    }
}

impl Config {
    /// 全ファイルを指定ディレクトリ配下に置く設定
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input_path: dir.join(INPUT_XLSX),
            output_path: dir.join(OUTPUT_JSON),
            report_path: dir.join(OUTPUT_REPORT),
            cache_path: dir.join(CACHE_FILE),
            ..Self::default()
        }
    }
}
