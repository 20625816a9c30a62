use std::marker::PhantomData;

use anyhow::anyhow;
use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

use registrar_core::{AppError, hash_password};
use registrar_db::{Body, DocumentStore};
use registrar_models::resource::field_label;
use registrar_models::{Resource, to_body};

use crate::metrics::track_document_operation;

/// Document operations for one entity collection.
pub struct EntityService<R>(PhantomData<R>);

impl<R: Resource> EntityService<R> {
    fn not_found() -> AppError {
        AppError::not_found(anyhow!("{} not found", R::LABEL))
    }

    /// Path ids that are not UUIDs cannot name a document.
    pub fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| Self::not_found())
    }

    #[instrument(skip_all, fields(db.operation = "find_all", db.collection = R::COLLECTION))]
    pub async fn fetch_all(store: &DocumentStore) -> Result<Vec<R>, AppError> {
        let documents = store.find_all(R::COLLECTION).await?;
        debug!(count = documents.len(), "Fetched documents");

        documents
            .iter()
            .map(|document| document.decode::<R>().map_err(AppError::internal))
            .collect()
    }

    #[instrument(skip(store), fields(db.operation = "find_by_id", db.collection = R::COLLECTION))]
    pub async fn fetch_one(store: &DocumentStore, id: &str) -> Result<R, AppError> {
        let id = Self::parse_id(id)?;
        let document = store
            .find_by_id(R::COLLECTION, id)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(document.decode()?)
    }

    #[instrument(skip_all, fields(db.operation = "insert", db.collection = R::COLLECTION))]
    pub async fn create(store: &DocumentStore, dto: R::Create) -> Result<R, AppError> {
        let mut body = to_body(&dto)?;

        R::check_document(&body)?;
        Self::ensure_unique(store, &body, None).await?;
        Self::hash_password_field(&mut body)?;

        let document = store.insert(R::COLLECTION, body).await?;
        track_document_operation(R::COLLECTION, "create");

        Ok(document.decode()?)
    }

    /// Merges only the supplied fields into the stored document.
    #[instrument(skip(store, dto), fields(db.operation = "update", db.collection = R::COLLECTION))]
    pub async fn update(store: &DocumentStore, id: &str, dto: R::Update) -> Result<R, AppError> {
        let id = Self::parse_id(id)?;
        let existing = store
            .find_by_id(R::COLLECTION, id)
            .await?
            .ok_or_else(Self::not_found)?;

        let mut patch = to_body(&dto)?;

        let mut merged = existing.body;
        merged.extend(patch.clone());
        R::check_document(&merged)?;

        Self::ensure_unique(store, &patch, Some(id)).await?;
        Self::hash_password_field(&mut patch)?;

        let document = store
            .update(R::COLLECTION, id, patch)
            .await?
            .ok_or_else(Self::not_found)?;
        track_document_operation(R::COLLECTION, "update");

        Ok(document.decode()?)
    }

    #[instrument(skip(store), fields(db.operation = "delete", db.collection = R::COLLECTION))]
    pub async fn delete(store: &DocumentStore, id: &str) -> Result<(), AppError> {
        let id = Self::parse_id(id)?;

        if !store.delete(R::COLLECTION, id).await? {
            return Err(Self::not_found());
        }
        track_document_operation(R::COLLECTION, "delete");

        Ok(())
    }

    /// Rejects a body whose unique fields are already taken by a document
    /// other than `current`.
    async fn ensure_unique(
        store: &DocumentStore,
        body: &Body,
        current: Option<Uuid>,
    ) -> Result<(), AppError> {
        for field in R::UNIQUE_FIELDS {
            let Some(value) = body.get(*field).filter(|v| !v.is_null()) else {
                continue;
            };

            let existing = store.find_one(R::COLLECTION, field, value).await?;
            if existing.is_some_and(|document| Some(document.id) != current) {
                return Err(AppError::conflict(anyhow!(
                    "{} with this {} already exists",
                    R::LABEL,
                    field_label(field)
                )));
            }
        }

        Ok(())
    }

    fn hash_password_field(body: &mut Body) -> Result<(), AppError> {
        let Some(field) = R::PASSWORD_FIELD else {
            return Ok(());
        };

        if let Some(Value::String(plain)) = body.get(field) {
            let hashed = hash_password(plain)?;
            body.insert(field.to_string(), Value::String(hashed));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use registrar_core::verify_password;
    use registrar_models::{
        CreatePeriodDto, CreateSchoolDto, CreateSubjectDto, Period, School, Subject,
        UpdatePeriodDto, UpdateSchoolDto, UpdateSubjectDto,
    };

    type Subjects = EntityService<Subject>;

    fn subject(name: &str, code: &str) -> CreateSubjectDto {
        CreateSubjectDto {
            school: None,
            subject_name: name.to_string(),
            subject_codename: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let store = DocumentStore::memory();
        let created = Subjects::create(&store, subject("Math", "MATH101")).await.unwrap();

        let all = Subjects::fetch_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);

        let one = Subjects::fetch_one(&store, &created.id.to_string()).await.unwrap();
        assert_eq!(one.subject_codename, "MATH101");
    }

    #[tokio::test]
    async fn test_duplicate_codename_conflicts() {
        let store = DocumentStore::memory();
        Subjects::create(&store, subject("Math", "MATH101")).await.unwrap();

        let err = Subjects::create(&store, subject("Maths", "MATH101")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(
            err.error.to_string(),
            "Subject with this subject codename already exists"
        );
        assert_eq!(Subjects::fetch_all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_may_keep_its_own_unique_value() {
        let store = DocumentStore::memory();
        let created = Subjects::create(&store, subject("Math", "MATH101")).await.unwrap();

        let patch = UpdateSubjectDto {
            subject_name: Some("Mathematics".to_string()),
            subject_codename: Some("MATH101".to_string()),
            ..Default::default()
        };
        let updated = Subjects::update(&store, &created.id.to_string(), patch)
            .await
            .unwrap();

        assert_eq!(updated.subject_name, "Mathematics");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_cannot_take_another_documents_value() {
        let store = DocumentStore::memory();
        Subjects::create(&store, subject("Math", "MATH101")).await.unwrap();
        let physics = Subjects::create(&store, subject("Physics", "PHY101")).await.unwrap();

        let patch = UpdateSubjectDto {
            subject_codename: Some("MATH101".to_string()),
            ..Default::default()
        };
        let err = Subjects::update(&store, &physics.id.to_string(), patch)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let store = DocumentStore::memory();

        let err = Subjects::delete(&store, &Uuid::new_v4().to_string()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = Subjects::fetch_one(&store, "not-a-uuid").await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Subject not found");

        let err = Subjects::update(&store, "42", UpdateSubjectDto::default())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_passwords_are_hashed() {
        let store = DocumentStore::memory();
        let school = EntityService::<School>::create(
            &store,
            CreateSchoolDto {
                school_name: "Greenfield".to_string(),
                email: "admin@greenfield.edu".to_string(),
                owner_name: "Ada".to_string(),
                school_image: None,
                password: "password123".to_string(),
            },
        )
        .await
        .unwrap();

        let stored = store
            .find_by_id("schools", school.id)
            .await
            .unwrap()
            .unwrap();
        let hash = stored.field("password").and_then(Value::as_str).unwrap();
        assert_ne!(hash, "password123");
        assert!(verify_password("password123", hash).unwrap());

        let patch = UpdateSchoolDto {
            password: Some("new-password".to_string()),
            ..Default::default()
        };
        EntityService::<School>::update(&store, &school.id.to_string(), patch)
            .await
            .unwrap();
        let stored = store
            .find_by_id("schools", school.id)
            .await
            .unwrap()
            .unwrap();
        let hash = stored.field("password").and_then(Value::as_str).unwrap();
        assert!(verify_password("new-password", hash).unwrap());
    }

    #[tokio::test]
    async fn test_period_window_checked_against_merged_document() {
        let store = DocumentStore::memory();
        let start = "2025-01-06T09:00:00Z".parse().unwrap();
        let end = "2025-01-06T10:00:00Z".parse().unwrap();
        let period = EntityService::<Period>::create(
            &store,
            CreatePeriodDto {
                school: None,
                teacher: Uuid::new_v4(),
                subject: Uuid::new_v4(),
                class: Uuid::new_v4(),
                start_time: start,
                end_time: end,
            },
        )
        .await
        .unwrap();

        let patch = UpdatePeriodDto {
            start_time: Some("2025-01-06T11:00:00Z".parse().unwrap()),
            ..Default::default()
        };
        let err = EntityService::<Period>::update(&store, &period.id.to_string(), patch)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let unchanged = EntityService::<Period>::fetch_one(&store, &period.id.to_string())
            .await
            .unwrap();
        assert_eq!(unchanged.start_time, start);
    }
}
