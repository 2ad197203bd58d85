pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CreateStatusCheckCommand, CreateStatusCheckError};
pub use queries::{ListStatusChecksError, ListStatusChecksQuery};
pub use routes::status_routes;
