// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, ImageOps and RuntimeInfo.

mod container;
mod image;
mod runtime_info;
pub(crate) mod sealed;
mod shared_types;

pub use container::{ContainerError, ContainerFilters, ContainerOps};
pub use image::{ImageError, ImageOps};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;

/// A runtime that can both list and clean up containers and images.
pub trait FullRuntime: ContainerOps + ImageOps + RuntimeInfo {}

impl<T: ContainerOps + ImageOps + RuntimeInfo> FullRuntime for T {}
