use registrar_models::{CreateTeacherDto, Teacher, UpdateTeacherDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Teacher,
    create: CreateTeacherDto,
    update: UpdateTeacherDto,
    tag: "Teachers",
    fetch_all: (fetch_teachers, "/api/teacher/fetch-all"),
    fetch_one: (fetch_teacher, "/api/teacher/fetch-single/{id}"),
    create_one: (create_teacher, "/api/teacher/create"),
    update_one: (update_teacher, "/api/teacher/update/{id}"),
    delete_one: (delete_teacher, "/api/teacher/delete/{id}"),
    login: (login_teacher, "/api/teacher/login")
}
