use crate::{
    DomainResult,
    models::{Student, StudentId, StudentName},
};

/// 取得成功を表すマーカー
///
/// 値を持たず、接続ハンドルなども含まない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fetched;

/// 学生の検索条件
///
/// 設定されたすべての条件に一致する学生を検索する。
/// 何も設定されていない場合は、すべての学生が一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub id: Option<StudentId>,
    pub name: Option<StudentName>,
    pub course: Option<String>,
    pub city: Option<String>,
}

impl StudentFilter {
    /// IDで検索する条件を作成する。
    pub fn by_id(id: StudentId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: StudentName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// 条件が1つも設定されていない場合は`true`を返す。
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none() && self.course.is_none() && self.city.is_none()
    }
}

/// 学生リポジトリ
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait StudentRepository: Send + Sync {
    /// 検索条件に一致する最初の学生を`destination`に書き込む。
    ///
    /// 複数の学生が一致する場合は、IDが最も小さい学生を選択する。
    /// エラーを返した場合、`destination`の内容は不定である。
    async fn fetch_first(
        &self,
        destination: &mut Student,
        filter: &StudentFilter,
    ) -> DomainResult<Fetched>;
}
