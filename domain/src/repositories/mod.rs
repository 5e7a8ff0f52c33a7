mod student;

pub use student::*;
