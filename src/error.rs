use thiserror::Error;

/// 致命的エラー（実行を中断して終了コード1で終わるもの）
///
/// 住所ごとのジオコーディング失敗はここに含めない。
/// それらはステータス文字列としてレポートに記録される。
#[derive(Error, Debug)]
pub enum ClubGeoError {
    #[error("{0} not found in repo root.")]
    InputNotFound(String),

    #[error("Expected columns CLUB and ADDRESS. Found: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("CSV出力エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl ClubGeoError {
    /// 起動・設定エラーの終了コード
    pub const EXIT_CODE: u8 = 1;
}

pub type Result<T> = std::result::Result<T, ClubGeoError>;
