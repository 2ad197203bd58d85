//! Evaporation Server Library
//!
//! HTTP service that estimates open-water evaporation with the Penman
//! combination equation and sizes storage reservoirs from the estimate.
//!
//! # Overview
//!
//! - **API Endpoints**: Evaporation, storage planning, and status routes under `/api`
//! - **Document Store**: PostgreSQL (JSONB) or in-memory collections behind [`db::DocumentStore`]
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS and request logging
//!
//! # Architecture
//!
//! - **Commands** (Write Operations): compute a record, persist it, return it
//! - **Queries** (Read Operations): newest-first history listings
//!
//! The models themselves live in `evapo_common` and are pure functions; handlers only
//! orchestrate model calls and persistence.
//!
//! # Example
//!
//! ```no_run
//! use evapo_server::{api, config::Config, db::Repository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let app = api::create_router(Repository::in_memory(), &config);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use error::{AppError, AppResult};
