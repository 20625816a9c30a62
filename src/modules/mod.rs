pub mod attendance;
pub mod auth;
pub mod classes;
pub mod entity;
pub mod examinations;
pub mod notices;
pub mod periods;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod teachers;
