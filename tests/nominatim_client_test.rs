//! Nominatimクライアントのテスト（ローカルHTTPサーバー使用）
//!
//! 送信するリクエスト（1回のGET・クエリ・User-Agent）と
//! 実際のレスポンスに対する分類を検証

use club_geocoder::config::{Config, USER_AGENT};
use club_geocoder::geocoder::{Geocoder, NominatimClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 1回だけ応答するサーバーを起動し、(エンドポイント, 受信リクエスト) を返す
async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let endpoint = format!("http://{}/search", listener.local_addr().unwrap());

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept失敗");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("受信失敗");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.expect("送信失敗");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).to_string()
    });

    (endpoint, handle)
}

fn client_for(endpoint: String) -> NominatimClient {
    let config = Config {
        endpoint,
        ..Config::default()
    };
    NominatimClient::new(&config).expect("クライアント生成失敗")
}

/// 正常系: クエリとUser-Agentを送り、先頭結果の座標を返す
#[tokio::test]
async fn test_geocode_sends_search_request() {
    let (endpoint, server) =
        serve_once("200 OK", r#"[{"lat": "37.1", "lon": "-93.2", "display_name": "Springfield"}]"#).await;
    let client = client_for(endpoint);

    let result = client.geocode("123 Main St, Springfield").await;
    assert_eq!(result.status, "OK");
    assert_eq!(result.lat, Some(37.1));
    assert_eq!(result.lng, Some(-93.2));

    let request = server.await.expect("サーバータスク失敗");
    let request_line = request.lines().next().unwrap_or_default();
    assert_eq!(
        request_line,
        "GET /search?q=123+Main+St%2C+Springfield&format=json&limit=1&addressdetails=0 HTTP/1.1"
    );

    let user_agent = request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
        })
        .expect("User-Agentヘッダーがない");
    assert_eq!(user_agent, USER_AGENT);
}

/// 検索結果が空
#[tokio::test]
async fn test_geocode_empty_result() {
    let (endpoint, server) = serve_once("200 OK", "[]").await;
    let client = client_for(endpoint);

    let result = client.geocode("0 Unknown Rd").await;
    assert_eq!(result.status, "No result");
    assert!(!result.has_coordinates());
    server.await.expect("サーバータスク失敗");
}

/// 2xx以外はステータスコードをそのまま記録
#[tokio::test]
async fn test_geocode_http_error() {
    let (endpoint, server) = serve_once("429 Too Many Requests", "").await;
    let client = client_for(endpoint);

    let result = client.geocode("123 Main St").await;
    assert_eq!(result.status, "HTTP 429");
    assert_eq!(result.lat, None);
    assert_eq!(result.lng, None);
    server.await.expect("サーバータスク失敗");
}

/// 接続できない場合は Request error（リトライしない）
#[tokio::test]
async fn test_geocode_connection_refused() {
    // ポートを確保してすぐ閉じる
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let endpoint = format!("http://{}/search", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(endpoint);
    let result = client.geocode("123 Main St").await;

    assert!(
        result.status.starts_with("Request error: "),
        "想定外のステータス: {}",
        result.status
    );
    assert!(!result.has_coordinates());
}
