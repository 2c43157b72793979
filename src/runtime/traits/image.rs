// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List and remove container images.

use super::sealed::Sealed;
use super::shared_types::ImageSummary;
use crate::types::ImageId;
use async_trait::async_trait;

/// Image operations: list, remove.
#[async_trait]
pub trait ImageOps: Sealed + Send + Sync {
    /// List images, including intermediate layers when `all` is set.
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>, ImageError>;

    /// Remove an image.
    async fn remove_image(&self, id: &ImageId, force: bool) -> Result<(), ImageError>;
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("image in use, cannot remove: {0}")]
    InUse(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
