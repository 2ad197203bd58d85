pub mod create;

pub use create::{CreateStatusCheckCommand, CreateStatusCheckError};
