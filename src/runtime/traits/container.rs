// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List, stop, and remove containers.

use super::sealed::Sealed;
use super::shared_types::ContainerSummary;
use crate::types::ContainerId;
use async_trait::async_trait;
use std::time::Duration;

/// Container lifecycle operations.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// List containers, running ones only unless `filters.all` is set.
    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerSummary>, ContainerError>;

    /// Stop a running container.
    ///
    /// `timeout` is the grace period before the runtime kills the container;
    /// `None` leaves it to the runtime's default.
    async fn stop_container(
        &self,
        id: &ContainerId,
        timeout: Option<Duration>,
    ) -> Result<(), ContainerError>;

    /// Remove a container.
    async fn remove_container(&self, id: &ContainerId, force: bool) -> Result<(), ContainerError>;
}

/// Filters for listing containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerFilters {
    /// Include stopped containers.
    pub all: bool,
}

impl ContainerFilters {
    /// Only running containers.
    pub fn running() -> Self {
        Self { all: false }
    }

    /// Containers in every state.
    pub fn all() -> Self {
        Self { all: true }
    }
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("container not running: {0}")]
    NotRunning(String),

    #[error("container is running, stop it or use --force: {0}")]
    Running(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
