pub mod cache;
mod nominatim;
mod types;

pub use cache::CacheStore;
pub use nominatim::{classify_response, NominatimClient};
pub use types::{status, GeocodeResult};

/// 住所 → 座標の解決
///
/// 失敗も `GeocodeResult` のステータスとして返す（`Err` にはしない）。
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> GeocodeResult;
}
