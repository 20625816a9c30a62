use registrar_models::{CreateSchoolDto, School, UpdateSchoolDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: School,
    create: CreateSchoolDto,
    update: UpdateSchoolDto,
    tag: "Schools",
    fetch_all: (fetch_schools, "/api/school/fetch-all"),
    fetch_one: (fetch_school, "/api/school/fetch-single/{id}"),
    create_one: (create_school, "/api/school/create"),
    update_one: (update_school, "/api/school/update/{id}"),
    delete_one: (delete_school, "/api/school/delete/{id}"),
    login: (login_school, "/api/school/login")
}
