pub mod calculate;

pub use calculate::{CalculateEvaporationCommand, CalculateEvaporationError};
