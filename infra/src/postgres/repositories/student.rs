use sqlx::{PgPool, Postgres, QueryBuilder};

use domain::{
    DomainError, DomainResult,
    models::{Student, StudentId, StudentName},
    repositories::{Fetched, StudentFilter, StudentRepository},
};

use crate::postgres::repositories::repository_error;

/// PostgreSQL学生リポジトリ
#[derive(Clone)]
pub struct PgStudentRepository {
    pub pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StudentRepository for PgStudentRepository {
    #[tracing::instrument(skip(self, destination))]
    async fn fetch_first(
        &self,
        destination: &mut Student,
        filter: &StudentFilter,
    ) -> DomainResult<Fetched> {
        let row = select_first(filter)
            .build_query_as::<StudentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;
        match row {
            Some(row) => {
                *destination = Student::try_from(row)?;
                Ok(Fetched)
            }
            None => {
                tracing::debug!("no student matched the filter");
                Err(student_not_found(filter))
            }
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    age: i64,
    dob: String,
    course: String,
    city: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = DomainError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        Ok(Student {
            id: StudentId(row.id),
            name: StudentName::new(row.name)?,
            age: row.age,
            dob: row.dob,
            course: row.course,
            city: row.city,
        })
    }
}

/// 検索条件に一致する最初の学生を選択するクエリを構築する。
///
/// 一致する学生が複数存在する場合に備えて、IDの昇順で並べて1行に制限する。
fn select_first(filter: &StudentFilter) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        r#"
        SELECT id, name, age, dob, course, city
        FROM student"#,
    );
    let mut keyword = " WHERE ";
    if let Some(id) = filter.id {
        builder.push(keyword).push("id = ").push_bind(id.0);
        keyword = " AND ";
    }
    if let Some(name) = filter.name.as_deref() {
        builder.push(keyword).push("name = ").push_bind(name);
        keyword = " AND ";
    }
    if let Some(course) = filter.course.as_deref() {
        builder.push(keyword).push("course = ").push_bind(course);
        keyword = " AND ";
    }
    if let Some(city) = filter.city.as_deref() {
        builder.push(keyword).push("city = ").push_bind(city);
    }
    builder.push(" ORDER BY id LIMIT 1");
    builder
}

fn student_not_found(filter: &StudentFilter) -> DomainError {
    match filter.id {
        Some(id) => DomainError::NotFound(format!("Student with id {}", id).into()),
        None => DomainError::NotFound("Student".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_sql(filter: &StudentFilter) -> String {
        select_first(filter)
            .sql()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn select_without_conditions() {
        assert_eq!(
            normalized_sql(&StudentFilter::default()),
            "SELECT id, name, age, dob, course, city FROM student ORDER BY id LIMIT 1"
        );
    }

    #[test]
    fn select_by_id() {
        assert_eq!(
            normalized_sql(&StudentFilter::by_id(StudentId(101))),
            "SELECT id, name, age, dob, course, city FROM student WHERE id = $1 ORDER BY id LIMIT 1"
        );
    }

    #[test]
    fn select_with_every_condition() {
        let filter = StudentFilter::by_id(StudentId(1))
            .with_name(StudentName(String::from("Iman")))
            .with_course("Physics")
            .with_city("Kolkata");
        assert_eq!(
            normalized_sql(&filter),
            "SELECT id, name, age, dob, course, city FROM student \
             WHERE id = $1 AND name = $2 AND course = $3 AND city = $4 \
             ORDER BY id LIMIT 1"
        );
    }

    #[test]
    fn select_without_id_starts_with_where() {
        let filter = StudentFilter::default().with_city("Pune");
        assert_eq!(
            normalized_sql(&filter),
            "SELECT id, name, age, dob, course, city FROM student WHERE city = $1 ORDER BY id LIMIT 1"
        );
    }

    #[rstest::rstest]
    #[case(StudentFilter::by_id(StudentId(999)), "Student with id 999 is not found")]
    #[case(StudentFilter::default().with_course("Art"), "Student is not found")]
    fn not_found_message(#[case] filter: StudentFilter, #[case] expected: &str) {
        let error = student_not_found(&filter);
        assert!(matches!(error, DomainError::NotFound(_)));
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn row_into_student() {
        let row = StudentRow {
            id: 101,
            name: String::from("Iman"),
            age: 24,
            dob: String::from("2000-01-15"),
            course: String::from("Physics"),
            city: String::from("Kolkata"),
        };
        let student = Student::try_from(row).unwrap();
        assert_eq!(student.id, StudentId(101));
        assert_eq!(&*student.name, "Iman");
        assert_eq!(student.age, 24);
        assert_eq!(student.dob, "2000-01-15");
        assert_eq!(student.course, "Physics");
        assert_eq!(student.city, "Kolkata");
    }

    #[test]
    fn row_with_too_long_name_is_rejected() {
        let row = StudentRow {
            id: 1,
            name: "a".repeat(101),
            age: 0,
            dob: String::new(),
            course: String::new(),
            city: String::new(),
        };
        let result = Student::try_from(row);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
