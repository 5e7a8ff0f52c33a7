pub mod primitives;
mod student;

pub use student::*;
