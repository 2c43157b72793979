// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Resolves the daemon endpoint and exposes list/stop/remove operations.

mod bollard;
mod detection;
mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, endpoint_from_host};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::{
    ContainerError, ContainerFilters, ContainerOps, ContainerState, ContainerSummary, FullRuntime,
    ImageError, ImageOps, ImageSummary, RuntimeInfo as RuntimeInfoTrait, RuntimeInfoError,
    RuntimeMetadata,
};
pub use types::{Endpoint, RuntimeConfig, RuntimeInfo, RuntimeType};

/// Detect the local runtime, open a client and verify the daemon answers.
pub async fn connect(config: &RuntimeConfig) -> Result<BollardRuntime, RuntimeError> {
    let info = detect_local(config)?;
    tracing::debug!(
        runtime = %info.runtime_type,
        endpoint = %info.endpoint,
        "connecting to container runtime"
    );

    let runtime = BollardRuntime::connect(&info)?;
    RuntimeInfoTrait::ping(&runtime).await?;

    match RuntimeInfoTrait::info(&runtime).await {
        Ok(meta) => tracing::debug!(
            name = %meta.name,
            version = %meta.version,
            api = %meta.api_version,
            os = %meta.os,
            arch = %meta.arch,
            "runtime is reachable"
        ),
        Err(e) => tracing::debug!(error = %e, "runtime answered ping but not info"),
    }

    Ok(runtime)
}
