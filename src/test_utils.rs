//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use wiremock::matchers::{
    method,
    path,
};
use wiremock::{
    Mock,
    MockServer,
    ResponseTemplate,
};

use crate::bootstrap::Bootstrap;
use crate::config::MiniAppSettings;
use crate::init_data::{
    InitDataResolver,
    StaticInitData,
};

/// モックサーバー向けの Bootstrap を作成する
///
/// # Arguments
/// * `server` - バックエンドのモックサーバー
/// * `host_init_data` - ホストが提供する init data
/// * `location_hash` - ページの `location.hash`
pub(crate) fn bootstrap_for(
    server: &MockServer,
    host_init_data: Option<&str>,
    location_hash: Option<&str>,
) -> Bootstrap {
    let provider = host_init_data.map_or_else(StaticInitData::none, StaticInitData::new);
    let mut resolver = InitDataResolver::new(Arc::new(provider));
    if let Some(hash) = location_hash {
        resolver = resolver.with_location_hash(hash);
    }

    let settings = MiniAppSettings { base_url: server.uri(), ..MiniAppSettings::default() };
    Bootstrap::from_settings(&settings, resolver).unwrap()
}

/// POST エンドポイントのレスポンスを登録する
pub(crate) async fn mount_post(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("POST")).and(path(endpoint)).respond_with(response).mount(server).await;
}
