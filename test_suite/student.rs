use domain::{
    DomainError,
    models::{Student, StudentId, StudentName},
    repositories::{Fetched, StudentFilter, StudentRepository as _},
};
use infra::postgres::repositories::PgStudentRepository;
use use_case::student::{StudentUseCase, get_name_by_id};

use crate::helpers::{TestDatabase, load_app_settings_for_testing};

fn student(id: i64, name: &str, course: &str, city: &str) -> Student {
    Student {
        id: StudentId(id),
        name: StudentName(name.to_string()),
        age: 20,
        dob: String::from("2004-05-06"),
        course: course.to_string(),
        city: city.to_string(),
    }
}

fn seed() -> Vec<Student> {
    vec![
        student(101, "Iman", "Physics", "Kolkata"),
        student(102, "Ravi", "Chemistry", "Pune"),
        student(103, "Asha", "Physics", "Pune"),
    ]
}

#[tokio::test]
#[ignore]
async fn fetch_first_populates_every_field() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    database.insert_students(&seed()).await;
    let repository = PgStudentRepository::new(database.pool.clone());

    let mut destination = Student::default();
    let result = repository
        .fetch_first(&mut destination, &StudentFilter::by_id(StudentId(102)))
        .await;

    assert_eq!(result, Ok(Fetched));
    assert_eq!(destination, student(102, "Ravi", "Chemistry", "Pune"));

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn fetch_first_picks_lowest_id_among_matches() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    let mut students = seed();
    students.reverse();
    database.insert_students(&students).await;
    let repository = PgStudentRepository::new(database.pool.clone());

    let mut destination = Student::default();
    repository
        .fetch_first(&mut destination, &StudentFilter::default().with_city("Pune"))
        .await
        .unwrap();
    assert_eq!(destination.id, StudentId(102));

    let mut destination = Student::default();
    repository
        .fetch_first(&mut destination, &StudentFilter::default())
        .await
        .unwrap();
    assert_eq!(destination.id, StudentId(101));

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn fetch_first_combines_conditions() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    database.insert_students(&seed()).await;
    let repository = PgStudentRepository::new(database.pool.clone());

    let mut destination = Student::default();
    let filter = StudentFilter::default()
        .with_course("Physics")
        .with_city("Pune");
    repository
        .fetch_first(&mut destination, &filter)
        .await
        .unwrap();
    assert_eq!(&*destination.name, "Asha");

    let mut destination = Student::default();
    let filter = StudentFilter::by_id(StudentId(101)).with_city("Pune");
    let result = repository.fetch_first(&mut destination, &filter).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn student_name_is_found_by_id() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    database.insert_students(&seed()).await;
    let repository = PgStudentRepository::new(database.pool.clone());

    let name = get_name_by_id(&repository, StudentId(101)).await;
    assert_eq!(name, Ok(StudentName(String::from("Iman"))));

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn missing_student_is_reported_as_not_found() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    database.insert_students(&seed()).await;
    let use_case = StudentUseCase::new(PgStudentRepository::new(database.pool.clone()));

    let result = use_case.get_name_by_id(StudentId(999)).await;
    assert_eq!(
        result,
        Err(DomainError::NotFound("Student with id 999".into()))
    );

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn repeated_lookups_are_identical() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    database.insert_students(&seed()).await;
    let use_case = StudentUseCase::new(PgStudentRepository::new(database.pool.clone()));

    let first = use_case.get_name_by_id(StudentId(103)).await;
    let second = use_case.get_name_by_id(StudentId(103)).await;
    assert_eq!(first, second);
    assert_eq!(first, Ok(StudentName(String::from("Asha"))));

    database.end().await;
}

#[tokio::test]
#[ignore]
async fn closed_pool_is_reported_as_repository_error() {
    let database = TestDatabase::begin(load_app_settings_for_testing()).await;
    let repository = PgStudentRepository::new(database.pool.clone());
    database.pool.close().await;

    let result = get_name_by_id(&repository, StudentId(101)).await;
    assert!(matches!(result, Err(DomainError::Repository(_))));

    database.end().await;
}
