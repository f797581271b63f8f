//! 翻訳辞書の取得

use serde_json::Value;
use url::Url;

use super::TranslationMap;

/// 翻訳辞書を取得する
///
/// どんな失敗も外には伝えない。
///
/// # Returns
/// - 2xx かつ JSON オブジェクト: 辞書
/// - 2xx 以外: 空の辞書
/// - 通信エラー、JSON パースエラー、オブジェクト以外の JSON: 空の辞書（warn ログ）
pub async fn load_translations(http: &reqwest::Client, url: &Url) -> TranslationMap {
    tracing::debug!("Loading translations from: {}", url);

    let response = match http.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch translations: {}", e);
            return TranslationMap::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("Translations unavailable ({}), using empty map", status);
        return TranslationMap::new();
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read translations body: {}", e);
            return TranslationMap::new();
        }
    };

    let json: Value = match serde_json::from_str(&body) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to parse translations: {}", e);
            return TranslationMap::new();
        }
    };

    TranslationMap::from_json(&json).unwrap_or_else(|| {
        tracing::warn!("Translations document is not a JSON object");
        TranslationMap::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{
        method,
        path,
    };
    use wiremock::{
        Mock,
        MockServer,
        ResponseTemplate,
    };

    use super::*;

    const TRANSLATIONS_PATH: &str = "/mini-app/translations.json";

    async fn load_from(server: &MockServer) -> TranslationMap {
        let url = Url::parse(&server.uri()).unwrap().join(TRANSLATIONS_PATH).unwrap();
        load_translations(&reqwest::Client::new(), &url).await
    }

    /// load_translations: 成功時は辞書を返す
    #[tokio::test]
    async fn test_load_translations_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TRANSLATIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"title": "Статус"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let map = load_from(&server).await;

        assert_that!(map.get("title"), some(eq("Статус")));
        assert_that!(map.len(), eq(1));
    }

    /// load_translations: 2xx 以外は本文に関係なく空の辞書
    #[rstest]
    #[case(404)]
    #[case(403)]
    #[case(500)]
    #[case(503)]
    #[tokio::test]
    async fn test_load_translations_non_success_is_empty(#[case] status: u16) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TRANSLATIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"title": "x"})))
            .mount(&server)
            .await;

        let map = load_from(&server).await;

        assert_that!(map.is_empty(), eq(true));
    }

    /// load_translations: JSON でない本文は空の辞書
    #[tokio::test]
    async fn test_load_translations_invalid_json_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TRANSLATIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let map = load_from(&server).await;

        assert_that!(map.is_empty(), eq(true));
    }

    /// load_translations: 接続できない場合も空の辞書
    #[tokio::test]
    async fn test_load_translations_unreachable_is_empty() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let url = Url::parse(&format!("http://127.0.0.1:{port}{TRANSLATIONS_PATH}")).unwrap();

        let map = load_translations(&reqwest::Client::new(), &url).await;

        assert_that!(map.is_empty(), eq(true));
    }
}
