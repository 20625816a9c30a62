//! CRUD shared by every entity module.
//!
//! Each entity module (`subjects`, `students`, ...) owns its router and
//! declares its handlers with [`entity_controller!`]; the document work
//! behind them is [`EntityService`], parameterised by the entity's
//! [`Resource`](registrar_models::Resource) impl.

mod controller;
pub mod service;

pub(crate) use controller::entity_controller;
pub use service::EntityService;
