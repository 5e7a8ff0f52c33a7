use domain::{
    DomainResult,
    models::{Student, StudentId, StudentName},
    repositories::{StudentFilter, StudentRepository},
};

/// IDで学生名を取得する。
///
/// リポジトリを1回だけ呼び出し、エラーはそのまま返す。
pub async fn get_name_by_id<R>(repository: &R, id: StudentId) -> DomainResult<StudentName>
where
    R: StudentRepository + ?Sized,
{
    let mut student = Student::default();
    repository
        .fetch_first(&mut student, &StudentFilter::by_id(id))
        .await?;
    Ok(student.name)
}

/// 学生ユースケース
pub struct StudentUseCase<R>
where
    R: StudentRepository,
{
    /// 学生リポジトリ
    pub repository: R,
}

impl<R> StudentUseCase<R>
where
    R: StudentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// IDで学生名を取得する。
    pub async fn get_name_by_id(&self, id: StudentId) -> DomainResult<StudentName> {
        get_name_by_id(&self.repository, id).await
    }
}
