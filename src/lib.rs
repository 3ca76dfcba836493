//! Table router: configuration-driven CRUD REST facade over SQLite tables and views.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{
    load_from_path, resolve, ResolvedModel, ResolvedResource, ResourceConfig, ResourceKind,
    ResourcesConfig, Settings,
};
pub use error::{AppError, ConfigError};
pub use response::ExecutionResult;
pub use routes::{app, common_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::connect;
