//! Create status check command
//!
//! Records that a client pinged the service. `client_name` is free text and is
//! stored as given, empty strings included.

use evapo_common::types::StatusCheck;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, Repository};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatusCheckCommand {
    pub client_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateStatusCheckError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repository, command), fields(client_name = %command.client_name))]
pub async fn handle(
    repository: Repository,
    command: CreateStatusCheckCommand,
) -> Result<StatusCheck, CreateStatusCheckError> {
    let check = StatusCheck::new(command.client_name);
    repository.insert(&check).await?;

    tracing::info!(id = %check.id, "Status check recorded");
    Ok(check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_status_check() {
        let repository = Repository::in_memory();
        let command = CreateStatusCheckCommand {
            client_name: "field-station-7".to_string(),
        };

        let check = handle(repository.clone(), command).await.unwrap();
        assert_eq!(check.client_name, "field-station-7");

        let stored: Vec<StatusCheck> = repository.history().await.unwrap();
        assert_eq!(stored, vec![check]);
    }

    #[tokio::test]
    async fn test_empty_client_name_is_accepted() {
        let repository = Repository::in_memory();
        let command = CreateStatusCheckCommand {
            client_name: String::new(),
        };

        let check = handle(repository, command).await.unwrap();
        assert!(check.client_name.is_empty());
    }

    #[test]
    fn test_deserialize_requires_client_name() {
        assert!(serde_json::from_str::<CreateStatusCheckCommand>("{}").is_err());
        let command: CreateStatusCheckCommand =
            serde_json::from_str(r#"{"client_name":"uptime-monitor"}"#).unwrap();
        assert_eq!(command.client_name, "uptime-monitor");
    }
}
