pub mod list;

pub use list::{ListStatusChecksError, ListStatusChecksQuery};
