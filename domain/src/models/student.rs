use garde::Validate as _;

use crate::{impl_int_primitive, impl_string_primitive};

/// 学生名の最大文字数
pub const STUDENT_NAME_MAX_LENGTH: usize = 100;

/// 学生ID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub i64);
impl_int_primitive!(StudentId, i64);

/// 学生名
///
/// 空文字列を許容する。
#[derive(Debug, Clone, Default, PartialEq, Eq, garde::Validate)]
pub struct StudentName(#[garde(length(chars, max = 100))] pub String);
impl_string_primitive!(StudentName);

/// 学生
///
/// `student`テーブルの1行に対応する。
/// `Student::default()`は、リポジトリが値を書き込むための空の入れ物として使用する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    /// ID
    pub id: StudentId,
    /// 名前
    pub name: StudentName,
    /// 年齢
    pub age: i64,
    /// 生年月日
    pub dob: String,
    /// コース
    pub course: String,
    /// 都市
    pub city: String,
}
