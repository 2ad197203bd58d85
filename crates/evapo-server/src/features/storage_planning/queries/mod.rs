pub mod history;

pub use history::{StoragePlanningHistoryError, StoragePlanningHistoryQuery};
