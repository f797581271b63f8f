//! 設定ファイルの読み込み

use std::path::Path;

use super::{
    ConfigError,
    MiniAppSettings,
    SETTINGS_FILE_NAME,
};

impl MiniAppSettings {
    /// ディレクトリの `.mini-app.json` から設定を読み込み、検証する
    ///
    /// ファイルが無ければデフォルト設定を検証して返す。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(SETTINGS_FILE_NAME);

        let settings = if config_path.exists() {
            tracing::debug!("Loading configuration from: {:?}", config_path);
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            Self::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings loaded successfully: {:?}", settings);

        Ok(settings)
    }
}
