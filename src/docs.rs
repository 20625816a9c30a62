use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use registrar_auth::{Identity, Role};
use registrar_core::{ErrorResponse, MessageResponse};
use registrar_models::{
    Attendance, AttendanceStatus, Class, CreateAttendanceDto, CreateClassDto,
    CreateExaminationDto, CreateNoticeDto, CreatePeriodDto, CreateSchoolDto, CreateStudentDto,
    CreateSubjectDto, CreateTeacherDto, Examination, LoginRequest, LoginResponse, Notice,
    NoticeAudience, Period, School, Student, Subject, Teacher, UpdateAttendanceDto,
    UpdateClassDto, UpdateExaminationDto, UpdateNoticeDto, UpdatePeriodDto, UpdateSchoolDto,
    UpdateStudentDto, UpdateSubjectDto, UpdateTeacherDto,
};

use crate::modules;

#[derive(OpenApi)]
#[openapi(
    paths(
        modules::auth::controller::check_auth,
        modules::schools::controller::login_school,
        modules::students::controller::login_student,
        modules::teachers::controller::login_teacher,
        modules::schools::controller::fetch_schools,
        modules::schools::controller::fetch_school,
        modules::schools::controller::create_school,
        modules::schools::controller::update_school,
        modules::schools::controller::delete_school,
        modules::students::controller::fetch_students,
        modules::students::controller::fetch_student,
        modules::students::controller::create_student,
        modules::students::controller::update_student,
        modules::students::controller::delete_student,
        modules::teachers::controller::fetch_teachers,
        modules::teachers::controller::fetch_teacher,
        modules::teachers::controller::create_teacher,
        modules::teachers::controller::update_teacher,
        modules::teachers::controller::delete_teacher,
        modules::classes::controller::fetch_classes,
        modules::classes::controller::fetch_class,
        modules::classes::controller::create_class,
        modules::classes::controller::update_class,
        modules::classes::controller::delete_class,
        modules::subjects::controller::fetch_subjects,
        modules::subjects::controller::fetch_subject,
        modules::subjects::controller::create_subject,
        modules::subjects::controller::update_subject,
        modules::subjects::controller::delete_subject,
        modules::examinations::controller::fetch_examinations,
        modules::examinations::controller::fetch_examination,
        modules::examinations::controller::create_examination,
        modules::examinations::controller::update_examination,
        modules::examinations::controller::delete_examination,
        modules::attendance::controller::fetch_attendance_records,
        modules::attendance::controller::fetch_attendance_record,
        modules::attendance::controller::create_attendance_record,
        modules::attendance::controller::update_attendance_record,
        modules::attendance::controller::delete_attendance_record,
        modules::periods::controller::fetch_periods,
        modules::periods::controller::fetch_period,
        modules::periods::controller::create_period,
        modules::periods::controller::update_period,
        modules::periods::controller::delete_period,
        modules::notices::controller::fetch_notices,
        modules::notices::controller::fetch_notice,
        modules::notices::controller::create_notice,
        modules::notices::controller::update_notice,
        modules::notices::controller::delete_notice,
    ),
    components(
        schemas(
            Identity,
            Role,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            School,
            CreateSchoolDto,
            UpdateSchoolDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Class,
            CreateClassDto,
            UpdateClassDto,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Examination,
            CreateExaminationDto,
            UpdateExaminationDto,
            Attendance,
            AttendanceStatus,
            CreateAttendanceDto,
            UpdateAttendanceDto,
            Period,
            CreatePeriodDto,
            UpdatePeriodDto,
            Notice,
            NoticeAudience,
            CreateNoticeDto,
            UpdateNoticeDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and session checks"),
        (name = "Schools", description = "School (tenant) records"),
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Classes", description = "Class records"),
        (name = "Subjects", description = "Subject records"),
        (name = "Examinations", description = "Examination schedule"),
        (name = "Attendance", description = "Daily attendance records"),
        (name = "Periods", description = "Timetable periods"),
        (name = "Notices", description = "School notices")
    ),
    info(
        title = "Registrar API",
        version = "0.1.0",
        description = "Multi-tenant school administration REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}
