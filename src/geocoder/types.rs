use serde::{Deserialize, Serialize};

/// ステータス文字列
///
/// クラブレコード・レポート・キャッシュで共通に使う唯一の結果表現。
pub mod status {
    pub const OK: &str = "OK";
    pub const OK_CACHED: &str = "OK (cached)";
    pub const NO_RESULT: &str = "No result";
    pub const SKIPPED: &str = "Skipped (missing name/address)";

    pub fn http(code: u16) -> String {
        format!("HTTP {}", code)
    }

    pub fn parse_error(detail: impl std::fmt::Display) -> String {
        format!("Parse error: {}", detail)
    }

    pub fn request_error(detail: impl std::fmt::Display) -> String {
        format!("Request error: {}", detail)
    }
}

/// ジオコーディング結果（キャッシュエントリと同じ形）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lng: Option<f64>,

    #[serde(default)]
    pub status: String,
}

impl GeocodeResult {
    pub fn resolved(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            status: status::OK.into(),
        }
    }

    pub fn unresolved(status: impl Into<String>) -> Self {
        Self {
            lat: None,
            lng: None,
            status: status.into(),
        }
    }

    /// 緯度・経度の両方が揃っているか
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}
