pub mod calculate;

pub use calculate::{
    CalculateStoragePlanningCommand, CalculateStoragePlanningError, StoragePlanningParams,
};
