use registrar_models::{CreateStudentDto, Student, UpdateStudentDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Student,
    create: CreateStudentDto,
    update: UpdateStudentDto,
    tag: "Students",
    fetch_all: (fetch_students, "/api/student/fetch-all"),
    fetch_one: (fetch_student, "/api/student/fetch-single/{id}"),
    create_one: (create_student, "/api/student/create"),
    update_one: (update_student, "/api/student/update/{id}"),
    delete_one: (delete_student, "/api/student/delete/{id}"),
    login: (login_student, "/api/student/login")
}
