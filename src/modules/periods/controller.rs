use registrar_models::{CreatePeriodDto, Period, UpdatePeriodDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Period,
    create: CreatePeriodDto,
    update: UpdatePeriodDto,
    tag: "Periods",
    fetch_all: (fetch_periods, "/api/period/fetch-all"),
    fetch_one: (fetch_period, "/api/period/fetch-single/{id}"),
    create_one: (create_period, "/api/period/create"),
    update_one: (update_period, "/api/period/update/{id}"),
    delete_one: (delete_period, "/api/period/delete/{id}")
}
