//! Evapo Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, numeric models, and ambient utilities for the Evapo project.
//!
//! # Overview
//!
//! - **Models**: the Penman-style evaporation model ([`penman`]) and the reservoir
//!   storage planning model ([`planning`]). Both are pure and synchronous.
//! - **Types**: immutable result records persisted by the server ([`types`])
//! - **Error Handling**: [`EvapoError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber setup shared by every binary ([`logging`])
//!
//! # Example
//!
//! ```no_run
//! use evapo_common::{penman, planning};
//!
//! fn main() -> evapo_common::Result<()> {
//!     let evaporation = penman::compute_evaporation(25.0, 60.0, 2.0, 20.0)?;
//!     let plan = planning::compute_storage_plan(
//!         evaporation.rate,
//!         planning::DEFAULT_SURFACE_AREA,
//!     )?;
//!     tracing::info!(capacity = plan.reservoir_capacity_needed, "planned");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod penman;
pub mod planning;
pub mod rounding;
pub mod timestamp;
pub mod types;

// Re-export commonly used types
pub use error::{EvapoError, Result};
