use std::borrow::Cow;

pub mod models;
pub mod repositories;

/// ドメインエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// 検証エラー
    #[error("{0}")]
    Validation(Cow<'static, str>),

    /// エンティティが存在しない
    #[error("{0} is not found")]
    NotFound(Cow<'static, str>),

    /// リポジトリエラー
    #[error("{0}")]
    Repository(Cow<'static, str>),
}

/// ドメイン結果
pub type DomainResult<T> = Result<T, DomainError>;
