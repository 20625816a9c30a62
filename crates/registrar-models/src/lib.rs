//! # Registrar Models
//!
//! Domain records and request DTOs for the Registrar API.
//!
//! Every entity is a flat JSON document in its own collection. For each one
//! this crate defines:
//!
//! - the record as returned to clients (`_id`, fields, timestamps),
//! - a `Create…Dto` with the required fields and validation rules,
//! - an `Update…Dto` whose fields are all optional; serializing it yields
//!   exactly the supplied fields, which is the partial-merge patch,
//! - a [`Resource`] impl naming the collection and its uniqueness rules.
//!
//! # Modules
//!
//! - [`resource`]: The [`Resource`] trait shared by all entities
//! - [`auth`]: Login request/response and the [`Account`] trait
//! - [`schools`], [`students`], [`teachers`]: account-bearing entities
//! - [`classes`], [`subjects`], [`examinations`], [`attendance`],
//!   [`periods`], [`notices`]: academic records
//! - [`validation`]: human-readable validation messages

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod examinations;
pub mod notices;
pub mod periods;
pub mod resource;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod validation;

pub use attendance::{Attendance, AttendanceStatus, CreateAttendanceDto, UpdateAttendanceDto};
pub use auth::{Account, LoginRequest, LoginResponse};
pub use classes::{Class, CreateClassDto, UpdateClassDto};
pub use examinations::{CreateExaminationDto, Examination, UpdateExaminationDto};
pub use notices::{CreateNoticeDto, Notice, NoticeAudience, UpdateNoticeDto};
pub use periods::{CreatePeriodDto, Period, UpdatePeriodDto};
pub use resource::{Resource, to_body};
pub use schools::{CreateSchoolDto, School, UpdateSchoolDto};
pub use students::{CreateStudentDto, Student, UpdateStudentDto};
pub use subjects::{CreateSubjectDto, Subject, UpdateSubjectDto};
pub use teachers::{CreateTeacherDto, Teacher, UpdateTeacherDto};
