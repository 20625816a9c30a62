use registrar_models::{Attendance, CreateAttendanceDto, UpdateAttendanceDto};

use crate::modules::entity::entity_controller;

entity_controller! {
    record: Attendance,
    create: CreateAttendanceDto,
    update: UpdateAttendanceDto,
    tag: "Attendance",
    fetch_all: (fetch_attendance_records, "/api/attendance/fetch-all"),
    fetch_one: (fetch_attendance_record, "/api/attendance/fetch-single/{id}"),
    create_one: (create_attendance_record, "/api/attendance/create"),
    update_one: (update_attendance_record, "/api/attendance/update/{id}"),
    delete_one: (delete_attendance_record, "/api/attendance/delete/{id}")
}
