//! Fake data generation through the public API.
//!
//! Payloads are generated in parallel with Rayon and posted one at a time,
//! so every seeded record passes the same validation as operator input.

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::{FirstName, LastName, Name};
use rayon::prelude::*;
use serde_json::{Value, json};
use std::time::Instant;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::entities::EntityKind;
use crate::error::CliResult;

/// Password given to every seeded account.
pub const SEED_PASSWORD: &str = "password123";

const SUBJECTS: &[(&str, &str)] = &[
    ("Mathematics", "MTH"),
    ("English Language", "ENG"),
    ("Basic Science", "BSC"),
    ("Social Studies", "SOS"),
    ("Computer Studies", "CMP"),
    ("Fine Art", "ART"),
];

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub schools: usize,
    pub teachers_per_school: usize,
    pub classes_per_school: usize,
    pub subjects_per_school: usize,
    pub students_per_class: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            schools: 2,
            teachers_per_school: 3,
            classes_per_school: 3,
            subjects_per_school: 4,
            students_per_class: 5,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub schools: usize,
    pub teachers: usize,
    pub classes: usize,
    pub subjects: usize,
    pub students: usize,
}

/// A unique, deliverable-looking address. The suffix keeps reruns from
/// colliding with earlier seeds.
fn seed_email(first: &str, last: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}.{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        &suffix[..8]
    )
    .replace(' ', "")
    .replace('\'', "")
}

pub fn generate_schools(count: usize) -> Vec<Value> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let company: String = CompanyName().fake();
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            json!({
                "school_name": format!("{} Academy", company),
                "email": seed_email("admin", &last),
                "owner_name": format!("{} {}", first, last),
                "password": SEED_PASSWORD,
            })
        })
        .collect()
}

pub fn generate_teachers(school: &str, count: usize) -> Vec<Value> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            json!({
                "school": school,
                "name": format!("{} {}", first, last),
                "email": seed_email(&first, &last),
                "qualification": "B.Ed",
                "age": (25..60u32).fake::<u32>(),
                "password": SEED_PASSWORD,
            })
        })
        .collect()
}

pub fn generate_classes(school: &str, teachers: &[String], count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "school": school,
                "class_text": format!("Grade {}", i + 1),
                "class_num": i + 1,
                "attendee": teachers.get(i % teachers.len().max(1)).cloned().unwrap_or_default(),
            })
        })
        .collect()
}

/// Codes carry a school-specific suffix since codenames are globally unique.
pub fn generate_subjects(school: &str, count: usize) -> Vec<Value> {
    let tag = &school[..school.len().min(4)];
    SUBJECTS
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, (name, code))| {
            json!({
                "school": school,
                "subject_name": name,
                "subject_codename": format!("{}{}-{}", code, 101 + i, tag.to_uppercase()),
            })
        })
        .collect()
}

pub fn generate_students(school: &str, class: &str, count: usize) -> Vec<Value> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            let guardian: String = Name().fake();
            json!({
                "school": school,
                "name": format!("{} {}", first, last),
                "email": seed_email(&first, &last),
                "student_class": class,
                "age": (6..18u32).fake::<u32>(),
                "guardian": guardian,
                "password": SEED_PASSWORD,
            })
        })
        .collect()
}

async fn post_all(client: &ApiClient, kind: EntityKind, payloads: Vec<Value>) -> CliResult<Vec<String>> {
    let mut ids = Vec::with_capacity(payloads.len());
    for payload in payloads {
        let envelope = client.create(kind.segment(), &payload).await?;
        if let Some(id) = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("_id"))
            .and_then(Value::as_str)
        {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

pub async fn seed_all(client: &ApiClient, config: SeedConfig) -> CliResult<SeedSummary> {
    let start = Instant::now();
    let mut summary = SeedSummary::default();

    println!("🏫 Seeding {} schools...", config.schools);
    let schools = post_all(client, EntityKind::School, generate_schools(config.schools)).await?;
    summary.schools = schools.len();

    for school in &schools {
        let teachers = post_all(
            client,
            EntityKind::Teacher,
            generate_teachers(school, config.teachers_per_school),
        )
        .await?;
        summary.teachers += teachers.len();

        let classes = post_all(
            client,
            EntityKind::Class,
            generate_classes(school, &teachers, config.classes_per_school),
        )
        .await?;
        summary.classes += classes.len();

        let subjects = post_all(
            client,
            EntityKind::Subject,
            generate_subjects(school, config.subjects_per_school),
        )
        .await?;
        summary.subjects += subjects.len();

        for class in &classes {
            let students = post_all(
                client,
                EntityKind::Student,
                generate_students(school, class, config.students_per_class),
            )
            .await?;
            summary.students += students.len();
        }
    }

    println!("   ✓ Seeding finished in {:?}", start.elapsed());
    Ok(summary)
}
