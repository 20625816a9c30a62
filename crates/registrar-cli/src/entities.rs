//! The entity kinds the client can manage and their form layouts.

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use registrar_models::validation::{format_errors, missing_field};
use registrar_models::{
    Attendance, Class, Examination, Notice, Period, Resource, School, Student, Subject, Teacher,
};

use crate::forms::{FieldKind, FormField};

const SCHOOL_FIELDS: &[FormField] = &[
    FormField::new("school_name", "School name", FieldKind::Text),
    FormField::new("email", "Email", FieldKind::Email),
    FormField::new("owner_name", "Owner name", FieldKind::Text),
    FormField::new("school_image", "Image URL", FieldKind::Text),
    FormField::new("password", "Password", FieldKind::Password),
];

const STUDENT_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("name", "Name", FieldKind::Text),
    FormField::new("email", "Email", FieldKind::Email),
    FormField::new("student_class", "Class", FieldKind::Reference),
    FormField::new("age", "Age", FieldKind::Integer),
    FormField::new("gender", "Gender", FieldKind::Text),
    FormField::new("guardian", "Guardian", FieldKind::Text),
    FormField::new("guardian_phone", "Guardian phone", FieldKind::Text),
    FormField::new("student_image", "Image URL", FieldKind::Text),
    FormField::new("password", "Password", FieldKind::Password),
];

const TEACHER_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("name", "Name", FieldKind::Text),
    FormField::new("email", "Email", FieldKind::Email),
    FormField::new("qualification", "Qualification", FieldKind::Text),
    FormField::new("age", "Age", FieldKind::Integer),
    FormField::new("gender", "Gender", FieldKind::Text),
    FormField::new("teacher_image", "Image URL", FieldKind::Text),
    FormField::new("password", "Password", FieldKind::Password),
];

const CLASS_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("class_text", "Class name", FieldKind::Text),
    FormField::new("class_num", "Class number", FieldKind::Integer),
    FormField::new("attendee", "Class teacher", FieldKind::Reference),
];

const SUBJECT_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("subject_name", "Subject name", FieldKind::Text),
    FormField::new("subject_codename", "Subject code", FieldKind::Text),
];

const EXAMINATION_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("exam_date", "Exam date", FieldKind::Date),
    FormField::new("subject", "Subject", FieldKind::Reference),
    FormField::new("exam_type", "Exam type", FieldKind::Text),
    FormField::new("class", "Class", FieldKind::Reference),
];

const ATTENDANCE_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("student", "Student", FieldKind::Reference),
    FormField::new("class", "Class", FieldKind::Reference),
    FormField::new("date", "Date", FieldKind::Date),
    FormField::new("status", "Status", FieldKind::Choice(&["Present", "Absent"])),
];

const PERIOD_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("teacher", "Teacher", FieldKind::Reference),
    FormField::new("subject", "Subject", FieldKind::Reference),
    FormField::new("class", "Class", FieldKind::Reference),
    FormField::new("start_time", "Start time", FieldKind::DateTime),
    FormField::new("end_time", "End time", FieldKind::DateTime),
];

const NOTICE_FIELDS: &[FormField] = &[
    FormField::new("school", "School", FieldKind::Reference),
    FormField::new("title", "Title", FieldKind::Text),
    FormField::new("message", "Message", FieldKind::Text),
    FormField::new(
        "audience",
        "Audience",
        FieldKind::Choice(&["student", "teacher", "all"]),
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    School,
    Student,
    Teacher,
    Class,
    Subject,
    Examination,
    Attendance,
    Period,
    Notice,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::School,
        EntityKind::Student,
        EntityKind::Teacher,
        EntityKind::Class,
        EntityKind::Subject,
        EntityKind::Examination,
        EntityKind::Attendance,
        EntityKind::Period,
        EntityKind::Notice,
    ];

    /// Path segment under `/api`.
    pub fn segment(&self) -> &'static str {
        match self {
            EntityKind::School => "school",
            EntityKind::Student => "student",
            EntityKind::Teacher => "teacher",
            EntityKind::Class => "class",
            EntityKind::Subject => "subject",
            EntityKind::Examination => "examination",
            EntityKind::Attendance => "attendance",
            EntityKind::Period => "period",
            EntityKind::Notice => "notices",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::School => School::LABEL,
            EntityKind::Student => Student::LABEL,
            EntityKind::Teacher => Teacher::LABEL,
            EntityKind::Class => Class::LABEL,
            EntityKind::Subject => Subject::LABEL,
            EntityKind::Examination => Examination::LABEL,
            EntityKind::Attendance => Attendance::LABEL,
            EntityKind::Period => Period::LABEL,
            EntityKind::Notice => Notice::LABEL,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self {
            EntityKind::School => SCHOOL_FIELDS,
            EntityKind::Student => STUDENT_FIELDS,
            EntityKind::Teacher => TEACHER_FIELDS,
            EntityKind::Class => CLASS_FIELDS,
            EntityKind::Subject => SUBJECT_FIELDS,
            EntityKind::Examination => EXAMINATION_FIELDS,
            EntityKind::Attendance => ATTENDANCE_FIELDS,
            EntityKind::Period => PERIOD_FIELDS,
            EntityKind::Notice => NOTICE_FIELDS,
        }
    }

    /// Whether records of this kind can log in.
    pub fn is_account(&self) -> bool {
        matches!(
            self,
            EntityKind::School | EntityKind::Student | EntityKind::Teacher
        )
    }

    /// Checks a form body with the same rules the server applies: the create
    /// DTO for new records, the update DTO when editing.
    pub fn validate(&self, body: &Map<String, Value>, editing: bool) -> Result<(), String> {
        match self {
            EntityKind::School => check::<School>(body, editing),
            EntityKind::Student => check::<Student>(body, editing),
            EntityKind::Teacher => check::<Teacher>(body, editing),
            EntityKind::Class => check::<Class>(body, editing),
            EntityKind::Subject => check::<Subject>(body, editing),
            EntityKind::Examination => check::<Examination>(body, editing),
            EntityKind::Attendance => check::<Attendance>(body, editing),
            EntityKind::Period => check::<Period>(body, editing),
            EntityKind::Notice => check::<Notice>(body, editing),
        }
    }
}

fn check<R: Resource>(body: &Map<String, Value>, editing: bool) -> Result<(), String> {
    if editing {
        check_dto::<R::Update>(body)?;
    } else {
        check_dto::<R::Create>(body)?;
    }
    R::check_document(body).map_err(|e| e.error.to_string())
}

fn check_dto<D: DeserializeOwned + Validate>(body: &Map<String, Value>) -> Result<(), String> {
    let dto: D = serde_json::from_value(Value::Object(body.clone())).map_err(|e| {
        let message = e.to_string();
        match missing_field(&message) {
            Some(field) => format!("{} is required", field),
            None => format!("Invalid value: {}", message),
        }
    })?;

    dto.validate().map_err(|errors| format_errors(&errors))
}
