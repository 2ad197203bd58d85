pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{CalculateEvaporationCommand, CalculateEvaporationError};
pub use queries::{EvaporationHistoryError, EvaporationHistoryQuery};
pub use routes::evaporation_routes;
