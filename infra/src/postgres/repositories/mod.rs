mod student;

pub use student::*;

use domain::DomainError;

/// sqlxのエラーをリポジトリエラーに変換する。
pub(crate) fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_keeps_message() {
        let error = repository_error(sqlx::Error::RowNotFound);
        assert!(matches!(error, DomainError::Repository(_)));
        assert_eq!(error.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
