use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Deserializer};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// 既定で検索する学生ID
pub const DEFAULT_STUDENT_ID: i64 = 101;

/// アプリケーション設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// データベース設定
    pub database: DatabaseSettings,
    /// ログ設定
    #[serde(default)]
    pub logging: LoggingSettings,
    /// 検索設定
    #[serde(default)]
    pub lookup: LookupSettings,
}

/// SSLモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// SSLを使用しない
    Disable,
    /// SSLを優先する
    #[default]
    Prefer,
    /// SSLを必須とする
    Require,
}

impl From<SslMode> for PgSslMode {
    fn from(value: SslMode) -> Self {
        match value {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// データベース設定
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// ユーザー名
    pub user: String,
    /// パスワード
    pub password: SecretString,
    /// データベース名
    pub name: String,
    /// SSLモード
    #[serde(default)]
    pub ssl_mode: SslMode,
    /// 最大接続数
    pub max_connections: u32,
    /// 接続タイムアウト（秒）
    pub connection_timeout: u64,
}

impl DatabaseSettings {
    /// データベース接続オプションを返す。
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.name)
            .ssl_mode(self.ssl_mode.into())
    }
}

/// ログ設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// ログレベル
    #[serde(deserialize_with = "deserialize_log_level")]
    pub level: log::Level,
}

/// ログレベルを大文字と小文字を区別せずに読み込む。
fn deserialize_log_level<'de, D>(deserializer: D) -> Result<log::Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: log::Level::Info,
        }
    }
}

/// 検索設定
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LookupSettings {
    /// 起動時に名前を取得する学生のID
    pub student_id: i64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            student_id: DEFAULT_STUDENT_ID,
        }
    }
}
