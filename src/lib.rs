//! # Registrar API
//!
//! A multi-tenant school administration REST API built with Rust, Axum, and
//! a JSON document store (PostgreSQL JSONB, or in-memory for tests).
//!
//! ## Overview
//!
//! Nine entities each get the same five routes under `/api/<segment>`:
//!
//! | Segment | Collection |
//! |---------|------------|
//! | `school` | `schools` |
//! | `student` | `students` |
//! | `teacher` | `teachers` |
//! | `class` | `classes` |
//! | `subject` | `subjects` |
//! | `examination` | `examinations` |
//! | `attendance` | `attendance` |
//! | `period` | `periods` |
//! | `notices` | `notices` |
//!
//! ```text
//! GET    /api/<segment>/fetch-all
//! GET    /api/<segment>/fetch-single/{id}
//! POST   /api/<segment>/create
//! PATCH  /api/<segment>/update/{id}
//! DELETE /api/<segment>/delete/{id}
//! ```
//!
//! Schools, students and teachers can also `POST /api/<segment>/login`, and
//! `GET /api/auth/check` reports who a session token belongs to.
//!
//! Every response is an envelope: `{"success": true, "message"?, "data"?}` on
//! success and `{"success": false, "message"}` on failure.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/      # AuthUser extractor (Bearer header or token cookie)
//! ├── modules/
//! │   ├── entity/      # EntityService<R>: CRUD shared by every entity
//! │   ├── auth/        # Login service and session check
//! │   └── <entity>/    # controller.rs + router.rs per entity
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Subscriber setup and request logging
//! ├── metrics.rs       # Prometheus recorder and counters
//! ├── router.rs        # Application router
//! ├── state.rs         # Shared application state
//! └── validator.rs     # ValidatedJson extractor
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=postgres://localhost:5432/school_management
//! JWT_SECRET=your-secure-secret-key
//! PORT=5001
//! ```
//!
//! Set `DATABASE_URL=memory://` to run without PostgreSQL.
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use registrar_auth;
pub use registrar_config;
pub use registrar_core;
pub use registrar_db;
pub use registrar_models;
