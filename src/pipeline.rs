//! 変換パイプライン
//!
//! ## 処理フロー
//! 1. Excelから入力行を読み込む（ファイル・列がなければ中断）
//! 2. キャッシュを読み込む
//! 3. 行ごとに 正規化 → キャッシュ照会 → ジオコーディング（未キャッシュのみ・毎回待機）
//! 4. clubs.json → レポートCSV → キャッシュ の順に保存
//!
//! 行ごとの処理は `RunState` を受け取って返す畳み込みとして書いている。
//! キャッシュはこの状態が所有し、グローバルには持たない。

use crate::config::Config;
use crate::error::Result;
use crate::export::{self, ClubRecord, ReportRow};
use crate::geocoder::{status, CacheStore, GeocodeResult, Geocoder, NominatimClient};
use crate::normalizer::{is_missing_cell, normalize_address, normalize_name, slugify};
use crate::spreadsheet::{read_club_rows, InputRow};

/// 座標が欠けたクラブがある場合の終了コード
pub const EXIT_INCOMPLETE: u8 = 2;

/// 1行の処理結果
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// 名前または住所が空
    Skipped,
    /// キャッシュから取得（API呼び出し・待機なし）
    CacheHit(GeocodeResult),
    /// APIで解決（失敗を含む）
    Resolved(GeocodeResult),
}

/// 畳み込みの状態
#[derive(Debug, Default)]
pub struct RunState {
    pub cache: CacheStore,
    pub clubs: Vec<ClubRecord>,
    pub report: Vec<ReportRow>,
    pub skipped: usize,
    pub cache_hits: usize,
    pub live_lookups: usize,
}

impl RunState {
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache,
            ..Default::default()
        }
    }

    /// 1行を処理して次の状態を返す
    pub async fn step<G: Geocoder>(mut self, row: &InputRow, geocoder: &G, config: &Config) -> Self {
        let name = normalize_name(&row.club);
        let address = normalize_address(&row.address);

        let outcome = if name.is_empty() || is_missing_cell(&address) {
            RowOutcome::Skipped
        } else if let Some(cached) = self.cache.get(&address) {
            log::debug!("Cache hit for row {}: {}", row.row, address);
            let status = if config.preserve_cached_status {
                cached.status.clone()
            } else {
                status::OK_CACHED.to_string()
            };
            RowOutcome::CacheHit(GeocodeResult { status, ..cached.clone() })
        } else {
            log::debug!("Looking up row {}: {}", row.row, address);
            let result = geocoder.geocode(&address).await;
            if !result.has_coordinates() {
                log::warn!("Could not geocode {:?} ({}): {}", name, address, result.status);
            }
            self.cache.insert(address.clone(), result.clone());
            tokio::time::sleep(config.request_delay).await;
            RowOutcome::Resolved(result)
        };

        self.record(row.row, name, address, outcome);
        self
    }

    fn record(&mut self, row: usize, name: String, address: String, outcome: RowOutcome) {
        let result = match outcome {
            RowOutcome::Skipped => {
                self.skipped += 1;
                self.report.push(ReportRow::new(row, &name, &address, status::SKIPPED, None, None));
                return;
            }
            RowOutcome::CacheHit(result) => {
                self.cache_hits += 1;
                result
            }
            RowOutcome::Resolved(result) => {
                self.live_lookups += 1;
                result
            }
        };

        self.report.push(ReportRow::new(
            row,
            &name,
            &address,
            &result.status,
            result.lat,
            result.lng,
        ));
        self.clubs.push(ClubRecord {
            id: slugify(&name),
            name,
            address,
            lat: result.lat,
            lng: result.lng,
        });
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.clubs.len(),
            missing: self.clubs.iter().filter(|c| c.is_missing_coordinates()).count(),
            skipped: self.skipped,
            cache_hits: self.cache_hits,
            live_lookups: self.live_lookups,
        }
    }
}

/// 実行結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 出力したクラブ数
    pub total: usize,
    /// 座標が欠けているクラブ数
    pub missing: usize,
    pub skipped: usize,
    pub cache_hits: usize,
    pub live_lookups: usize,
}

impl RunSummary {
    /// 0: 全件解決 / 2: 未解決あり
    pub fn exit_code(&self) -> u8 {
        if self.missing > 0 {
            EXIT_INCOMPLETE
        } else {
            0
        }
    }
}

/// 入力行を順に畳み込む
pub async fn process_rows<G: Geocoder>(
    rows: &[InputRow],
    cache: CacheStore,
    geocoder: &G,
    config: &Config,
) -> RunState {
    let mut state = RunState::new(cache);
    for row in rows {
        state = state.step(row, geocoder, config).await;
    }
    state
}

/// Nominatimを使って変換を実行
pub async fn run(config: &Config) -> Result<RunSummary> {
    let client = NominatimClient::new(config)?;
    run_with(config, &client).await
}

/// 任意のジオコーダで変換を実行
pub async fn run_with<G: Geocoder>(config: &Config, geocoder: &G) -> Result<RunSummary> {
    let rows = read_club_rows(&config.input_path)?;
    let cache = CacheStore::load(&config.cache_path);
    log::info!(
        "Read {} rows from {} ({} cached addresses)",
        rows.len(),
        config.input_path.display(),
        cache.len()
    );

    let state = process_rows(&rows, cache, geocoder, config).await;
    let summary = state.summary();
    log::info!(
        "Processed rows: {} live lookups, {} cache hits, {} skipped",
        summary.live_lookups,
        summary.cache_hits,
        summary.skipped
    );

    // 出力に失敗してもキャッシュは保存する
    let exported = export::export_results(
        &state.clubs,
        &state.report,
        &config.output_path,
        &config.report_path,
    );
    let persisted = state.cache.save(&config.cache_path);
    exported?;
    persisted?;

    Ok(summary)
}
