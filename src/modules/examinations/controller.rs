use registrar_models::{CreateExaminationDto, Examination, UpdateExaminationDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Examination,
    create: CreateExaminationDto,
    update: UpdateExaminationDto,
    tag: "Examinations",
    fetch_all: (fetch_examinations, "/api/examination/fetch-all"),
    fetch_one: (fetch_examination, "/api/examination/fetch-single/{id}"),
    create_one: (create_examination, "/api/examination/create"),
    update_one: (update_examination, "/api/examination/update/{id}"),
    delete_one: (delete_examination, "/api/examination/delete/{id}")
}
