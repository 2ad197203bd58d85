pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CalculateStoragePlanningCommand, CalculateStoragePlanningError, StoragePlanningParams,
};
pub use queries::{StoragePlanningHistoryError, StoragePlanningHistoryQuery};
pub use routes::storage_planning_routes;
