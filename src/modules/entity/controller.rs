/// Generates the five CRUD handlers for one entity, plus a login handler for
/// account-bearing entities.
///
/// Handler names and route paths are spelled out at the call site so they
/// stay greppable and can be listed in [`ApiDoc`](crate::docs::ApiDoc).
///
/// ```ignore
/// entity_controller! {
///     record: Subject,
///     create: CreateSubjectDto,
///     update: UpdateSubjectDto,
///     tag: "Subjects",
///     fetch_all: (fetch_subjects, "/api/subject/fetch-all"),
///     fetch_one: (fetch_subject, "/api/subject/fetch-single/{id}"),
///     create_one: (create_subject, "/api/subject/create"),
///     update_one: (update_subject, "/api/subject/update/{id}"),
///     delete_one: (delete_subject, "/api/subject/delete/{id}"),
/// }
/// ```
macro_rules! entity_controller {
    (
        record: $record:ident,
        create: $create_dto:ident,
        update: $update_dto:ident,
        tag: $tag:tt,
        fetch_all: ($fetch_all:ident, $fetch_all_path:tt),
        fetch_one: ($fetch_one:ident, $fetch_one_path:tt),
        create_one: ($create_one:ident, $create_path:tt),
        update_one: ($update_one:ident, $update_path:tt),
        delete_one: ($delete_one:ident, $delete_path:tt)
        $(, login: ($login:ident, $login_path:tt))?
        $(,)?
    ) => {
        #[utoipa::path(
            get,
            path = $fetch_all_path,
            responses(
                (status = 200, description = "All records in insertion order", body = registrar_core::ApiResponse<Vec<$record>>),
                (status = 500, description = "Internal server error", body = registrar_core::ErrorResponse)
            ),
            tag = $tag
        )]
        #[tracing::instrument(skip(state))]
        pub async fn $fetch_all(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
        ) -> Result<axum::Json<registrar_core::ApiResponse<Vec<$record>>>, registrar_core::AppError> {
            let records = $crate::modules::entity::EntityService::<$record>::fetch_all(&state.store).await?;
            Ok(axum::Json(registrar_core::ApiResponse::data(records)))
        }

        #[utoipa::path(
            get,
            path = $fetch_one_path,
            params(
                ("id" = String, Path, description = "Record ID")
            ),
            responses(
                (status = 200, description = "Record details", body = registrar_core::ApiResponse<$record>),
                (status = 404, description = "Record not found", body = registrar_core::ErrorResponse)
            ),
            tag = $tag
        )]
        #[tracing::instrument(skip(state))]
        pub async fn $fetch_one(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
        ) -> Result<axum::Json<registrar_core::ApiResponse<$record>>, registrar_core::AppError> {
            let record = $crate::modules::entity::EntityService::<$record>::fetch_one(&state.store, &id).await?;
            Ok(axum::Json(registrar_core::ApiResponse::data(record)))
        }

        #[utoipa::path(
            post,
            path = $create_path,
            request_body = $create_dto,
            responses(
                (status = 201, description = "Record created", body = registrar_core::ApiResponse<$record>),
                (status = 400, description = "Malformed request body", body = registrar_core::ErrorResponse),
                (status = 409, description = "Duplicate value", body = registrar_core::ErrorResponse),
                (status = 422, description = "Validation failed", body = registrar_core::ErrorResponse)
            ),
            tag = $tag
        )]
        #[tracing::instrument(skip(state, dto))]
        pub async fn $create_one(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            $crate::validator::ValidatedJson(dto): $crate::validator::ValidatedJson<$create_dto>,
        ) -> Result<
            (axum::http::StatusCode, axum::Json<registrar_core::ApiResponse<$record>>),
            registrar_core::AppError,
        > {
            let record = $crate::modules::entity::EntityService::<$record>::create(&state.store, dto).await?;
            let message = format!(
                "{} created successfully",
                <$record as registrar_models::Resource>::LABEL
            );
            Ok((
                axum::http::StatusCode::CREATED,
                axum::Json(registrar_core::ApiResponse::with_message(message, record)),
            ))
        }

        #[utoipa::path(
            patch,
            path = $update_path,
            params(
                ("id" = String, Path, description = "Record ID")
            ),
            request_body = $update_dto,
            responses(
                (status = 200, description = "Record updated", body = registrar_core::ApiResponse<$record>),
                (status = 404, description = "Record not found", body = registrar_core::ErrorResponse),
                (status = 409, description = "Duplicate value", body = registrar_core::ErrorResponse),
                (status = 422, description = "Validation failed", body = registrar_core::ErrorResponse)
            ),
            tag = $tag
        )]
        #[tracing::instrument(skip(state, dto))]
        pub async fn $update_one(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
            $crate::validator::ValidatedJson(dto): $crate::validator::ValidatedJson<$update_dto>,
        ) -> Result<axum::Json<registrar_core::ApiResponse<$record>>, registrar_core::AppError> {
            let record = $crate::modules::entity::EntityService::<$record>::update(&state.store, &id, dto).await?;
            let message = format!(
                "{} updated successfully",
                <$record as registrar_models::Resource>::LABEL
            );
            Ok(axum::Json(registrar_core::ApiResponse::with_message(message, record)))
        }

        #[utoipa::path(
            delete,
            path = $delete_path,
            params(
                ("id" = String, Path, description = "Record ID")
            ),
            responses(
                (status = 200, description = "Record deleted", body = registrar_core::MessageResponse),
                (status = 404, description = "Record not found", body = registrar_core::ErrorResponse)
            ),
            tag = $tag
        )]
        #[tracing::instrument(skip(state))]
        pub async fn $delete_one(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
        ) -> Result<axum::Json<registrar_core::MessageResponse>, registrar_core::AppError> {
            $crate::modules::entity::EntityService::<$record>::delete(&state.store, &id).await?;
            Ok(axum::Json(registrar_core::MessageResponse::ok(format!(
                "{} deleted successfully",
                <$record as registrar_models::Resource>::LABEL
            ))))
        }

        $(
            #[utoipa::path(
                post,
                path = $login_path,
                request_body = registrar_models::LoginRequest,
                responses(
                    (status = 200, description = "Login successful", body = registrar_core::ApiResponse<registrar_models::LoginResponse>),
                    (status = 400, description = "Malformed request body", body = registrar_core::ErrorResponse),
                    (status = 401, description = "Invalid email or password", body = registrar_core::ErrorResponse)
                ),
                tag = "Authentication"
            )]
            #[tracing::instrument(skip(state, dto), fields(email = %dto.email))]
            pub async fn $login(
                axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
                $crate::validator::ValidatedJson(dto): $crate::validator::ValidatedJson<registrar_models::LoginRequest>,
            ) -> Result<
                axum::Json<registrar_core::ApiResponse<registrar_models::LoginResponse>>,
                registrar_core::AppError,
            > {
                let response = $crate::modules::auth::service::AuthService::login::<$record>(
                    &state.store,
                    &state.jwt_config,
                    dto,
                )
                .await?;
                Ok(axum::Json(registrar_core::ApiResponse::with_message(
                    "Login successful",
                    response,
                )))
            }
        )?
    };
}

pub(crate) use entity_controller;
