use registrar_models::{Class, CreateClassDto, UpdateClassDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Class,
    create: CreateClassDto,
    update: UpdateClassDto,
    tag: "Classes",
    fetch_all: (fetch_classes, "/api/class/fetch-all"),
    fetch_one: (fetch_class, "/api/class/fetch-single/{id}"),
    create_one: (create_class, "/api/class/create"),
    update_one: (update_class, "/api/class/update/{id}"),
    delete_one: (delete_class, "/api/class/delete/{id}")
}
