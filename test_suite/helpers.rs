//! This module sets up the database for integration tests
//!
//! The integration test uses the same PostgreSQL container as the development environment.
//! But, it creates a separate test database for each test.
//! The test database is named in the format `test_student_db_<uuid>`,
//! where `<uuid>` is the UUID with hyphens replaced by underscores.
//! The database is dropped when the test calls `TestDatabase::end`.
use std::path::Path;

use sqlx::{Connection as _, Executor as _, PgConnection, PgPool};

use app::{create_pg_pool, load_app_settings};
use domain::models::Student;
use settings::{AppSettings, DatabaseSettings};

pub const TEST_DATABASE_PREFIX: &str = "test_student_db_";

pub fn load_app_settings_for_testing() -> AppSettings {
    let dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set");
    let path = Path::new(&dir).join("..").join("app_settings.toml");
    load_app_settings(path.as_os_str().to_str().unwrap()).unwrap()
}

pub struct TestDatabase {
    pub settings: DatabaseSettings,
    pub pool: PgPool,
}

impl TestDatabase {
    pub async fn begin(app_settings: AppSettings) -> Self {
        let database_name =
            format!("{}{}", TEST_DATABASE_PREFIX, uuid::Uuid::new_v4()).replace('-', "_");
        let settings = DatabaseSettings {
            name: database_name,
            ..app_settings.database
        };

        // Create the test database by connecting to the **postgres** database
        let mut conn = PgConnection::connect_with(&postgres_settings(&settings).connect_options())
            .await
            .unwrap();
        conn.execute(format!("CREATE DATABASE {};", settings.name).as_str())
            .await
            .unwrap();
        conn.close().await.unwrap();

        // Migrate the database
        let pool = create_pg_pool(&settings).await.unwrap();
        sqlx::migrate!("../migrations").run(&pool).await.unwrap();

        Self { settings, pool }
    }

    pub async fn insert_students(&self, students: &[Student]) {
        for student in students {
            sqlx::query(
                r#"
                INSERT INTO student (id, name, age, dob, course, city)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(student.id.0)
            .bind(&student.name.0)
            .bind(student.age)
            .bind(&student.dob)
            .bind(&student.course)
            .bind(&student.city)
            .execute(&self.pool)
            .await
            .unwrap();
        }
    }

    pub async fn end(self) {
        self.pool.close().await;
        let mut conn =
            PgConnection::connect_with(&postgres_settings(&self.settings).connect_options())
                .await
                .unwrap();
        conn.execute(format!("DROP DATABASE IF EXISTS {};", self.settings.name).as_str())
            .await
            .unwrap();
        conn.close().await.unwrap();
    }
}

fn postgres_settings(settings: &DatabaseSettings) -> DatabaseSettings {
    DatabaseSettings {
        name: String::from("postgres"),
        ..settings.clone()
    }
}
