use std::time::Duration;

use anyhow::Context as _;
use config::Config;
use sqlx::postgres::PgPoolOptions;
use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt as _};

use domain::{
    DomainResult,
    models::{StudentId, StudentName},
};
use settings::{AppSettings, DatabaseSettings};

pub fn load_app_settings(path: &str) -> anyhow::Result<AppSettings> {
    let config = Config::builder()
        .add_source(config::File::with_name(path))
        .build()
        .context("Failed to read the app_settings.toml file")?;
    config
        .try_deserialize()
        .context("The contents of the app_settings.toml file is incorrect")
}

pub async fn create_pg_pool(
    settings: &DatabaseSettings,
) -> anyhow::Result<sqlx::Pool<sqlx::Postgres>> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.connection_timeout))
        .connect_with(settings.connect_options())
        .await
        .context("Failed to connect to the database")
}

pub fn get_subscriber<Sink>(
    name: String,
    log_level: log::Level,
    sink: Sink,
) -> impl Subscriber + Sync + Send
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")
}

/// 学生名の取得結果を表示用の文字列にする。
pub fn lookup_message(id: StudentId, result: &DomainResult<StudentName>) -> String {
    match result {
        Ok(name) => format!("Student name for ID {}: {}", id, name),
        Err(e) => format!("Failed to get student name for ID {}: {}", id, e),
    }
}
