use registrar_models::{CreateSubjectDto, Subject, UpdateSubjectDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Subject,
    create: CreateSubjectDto,
    update: UpdateSubjectDto,
    tag: "Subjects",
    fetch_all: (fetch_subjects, "/api/subject/fetch-all"),
    fetch_one: (fetch_subject, "/api/subject/fetch-single/{id}"),
    create_one: (create_subject, "/api/subject/create"),
    update_one: (update_subject, "/api/subject/update/{id}"),
    delete_one: (delete_subject, "/api/subject/delete/{id}")
}
