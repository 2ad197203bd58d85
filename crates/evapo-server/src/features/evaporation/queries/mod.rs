pub mod history;

pub use history::{EvaporationHistoryError, EvaporationHistoryQuery};
