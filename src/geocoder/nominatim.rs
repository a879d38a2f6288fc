//! Nominatim（OpenStreetMap）連携モジュール
//!
//! 1住所につき1回だけ検索APIを呼び、結果をステータス文字列に分類する。
//! リトライはしない。待機（レート制限）は呼び出し側の責務。

use super::types::{status, GeocodeResult};
use super::Geocoder;
use crate::config::Config;
use crate::error::Result;
use serde_json::Value;

/// Nominatim検索APIクライアント
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    endpoint: String,
}

impl NominatimClient {
    /// User-Agentとタイムアウトを設定したクライアントを生成
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> GeocodeResult {
        let request = self.client.get(&self.endpoint).query(&[
            ("q", address),
            ("format", "json"),
            ("limit", "1"),
            ("addressdetails", "0"),
        ]);

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return GeocodeResult::unresolved(status::request_error(e)),
        };

        let code = response.status().as_u16();
        if !response.status().is_success() {
            return GeocodeResult::unresolved(status::http(code));
        }

        match response.text().await {
            Ok(body) => classify_response(code, &body),
            Err(e) => GeocodeResult::unresolved(status::request_error(e)),
        }
    }
}

/// HTTPステータスとレスポンス本文から結果を分類する
pub fn classify_response(code: u16, body: &str) -> GeocodeResult {
    if !(200..300).contains(&code) {
        return GeocodeResult::unresolved(status::http(code));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(places) => classify_places(&places),
        Err(e) => GeocodeResult::unresolved(status::parse_error(e)),
    }
}

/// 検索結果配列の先頭から座標を取り出す
fn classify_places(places: &Value) -> GeocodeResult {
    let Some(places) = places.as_array() else {
        return GeocodeResult::unresolved(status::parse_error("expected a JSON array of results"));
    };

    let Some(first) = places.first() else {
        return GeocodeResult::unresolved(status::NO_RESULT);
    };

    match (coordinate(first, "lat"), coordinate(first, "lon")) {
        (Ok(lat), Ok(lng)) => GeocodeResult::resolved(lat, lng),
        (Err(detail), _) | (_, Err(detail)) => {
            GeocodeResult::unresolved(status::parse_error(detail))
        }
    }
}

/// 座標値を取り出す（APIは文字列で返すが数値も受け付ける）
fn coordinate(place: &Value, key: &str) -> std::result::Result<f64, String> {
    let value = match place.get(key) {
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid {} {:?}: {}", key, s, e))?,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("invalid {} {}", key, n))?,
        Some(other) => return Err(format!("unexpected {} value {}", key, other)),
        None => return Err(format!("missing field '{}'", key)),
    };

    // NaN/inf はJSONに書けない
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("non-finite {} {}", key, value))
    }
}
