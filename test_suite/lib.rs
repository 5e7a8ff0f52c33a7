mod helpers;
mod student;
