//! tma-bootstrap
//!
//! Telegram ミニアプリの起動処理: 翻訳の適用、init data の取得、認証付き API 呼び出し

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod i18n;
pub mod init_data;
mod json;
pub mod page;

#[cfg(test)]
mod test_utils;

// Bootstrap を再エクスポート
pub use bootstrap::{
    Bootstrap,
    Outcome,
};
