use registrar_models::{CreateNoticeDto, Notice, UpdateNoticeDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Notice,
    create: CreateNoticeDto,
    update: UpdateNoticeDto,
    tag: "Notices",
    fetch_all: (fetch_notices, "/api/notices/fetch-all"),
    fetch_one: (fetch_notice, "/api/notices/fetch-single/{id}"),
    create_one: (create_notice, "/api/notices/create"),
    update_one: (update_notice, "/api/notices/update/{id}"),
    delete_one: (delete_notice, "/api/notices/delete/{id}")
}
