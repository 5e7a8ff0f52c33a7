use domain::models::StudentId;
use infra::postgres::repositories::PgStudentRepository;
use use_case::student::StudentUseCase;

use app::{create_pg_pool, get_subscriber, init_subscriber, load_app_settings, lookup_message};

/// アプリケーションエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // アプリケーション設定を読み込み
    let app_settings = load_app_settings("app_settings.toml")?;

    // ログを標準エラー出力に出力
    let subscriber = get_subscriber(
        String::from("student-lookup"),
        app_settings.logging.level,
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    // データベースに接続できない場合は終了
    let pool = create_pg_pool(&app_settings.database).await?;
    println!("Connected to PostgreSQL!");

    let use_case = StudentUseCase::new(PgStudentRepository::new(pool));
    let id = StudentId(app_settings.lookup.student_id);
    tracing::info!(student_id = %id, "looking up student name");
    let result = use_case.get_name_by_id(id).await;
    println!("{}", lookup_message(id, &result));

    Ok(())
}
