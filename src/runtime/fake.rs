// ABOUTME: In-memory runtime for unit tests.
// ABOUTME: Records every call and fails actions for configured names.

use super::traits::sealed::Sealed;
use super::traits::{
    ContainerError, ContainerFilters, ContainerOps, ContainerState, ContainerSummary, ImageError,
    ImageOps, ImageSummary, RuntimeInfo, RuntimeInfoError, RuntimeMetadata,
};
use crate::types::{ContainerId, ImageId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// A call the fake received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListContainers { all: bool },
    ListImages,
    Stop(String),
    RemoveContainer { id: String, force: bool },
    RemoveImage { id: String, force: bool },
}

#[derive(Default)]
pub struct FakeRuntime {
    containers: Vec<ContainerSummary>,
    images: Vec<ImageSummary>,
    failing: HashSet<String>,
    list_fails: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, name: &str, state: ContainerState) -> Self {
        self.containers.push(ContainerSummary {
            id: ContainerId::new(format!("{name}-id")),
            name: name.to_string(),
            image: format!("{name}:latest"),
            state,
        });
        self
    }

    pub fn with_image(mut self, name: &str, containers: i64) -> Self {
        self.images.push(ImageSummary {
            id: ImageId::new(format!("sha256:{name}")),
            name: name.to_string(),
            size: 5 * 1024 * 1024,
            containers,
        });
        self
    }

    /// Make every action on the resource with this name fail.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Make every list call fail.
    pub fn unreachable(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn fails_container(&self, id: &ContainerId) -> bool {
        self.containers
            .iter()
            .any(|c| &c.id == id && self.failing.contains(&c.name))
    }

    fn fails_image(&self, id: &ImageId) -> bool {
        self.images
            .iter()
            .any(|i| &i.id == id && self.failing.contains(&i.name))
    }
}

impl Sealed for FakeRuntime {}

#[async_trait]
impl RuntimeInfo for FakeRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        Ok(RuntimeMetadata {
            name: "Fake".to_string(),
            version: "0.0.0".to_string(),
            api_version: "1.0".to_string(),
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(
        &self,
        filters: &ContainerFilters,
    ) -> Result<Vec<ContainerSummary>, ContainerError> {
        self.record(Call::ListContainers { all: filters.all });
        if self.list_fails {
            return Err(ContainerError::Runtime("daemon went away".to_string()));
        }
        Ok(self
            .containers
            .iter()
            .filter(|c| filters.all || c.state == ContainerState::Running)
            .cloned()
            .collect())
    }

    async fn stop_container(
        &self,
        id: &ContainerId,
        _timeout: Option<Duration>,
    ) -> Result<(), ContainerError> {
        self.record(Call::Stop(id.to_string()));
        if self.fails_container(id) {
            return Err(ContainerError::Runtime(format!("cannot stop {id}")));
        }
        Ok(())
    }

    async fn remove_container(&self, id: &ContainerId, force: bool) -> Result<(), ContainerError> {
        self.record(Call::RemoveContainer {
            id: id.to_string(),
            force,
        });
        if self.fails_container(id) {
            return Err(ContainerError::Running(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self, _all: bool) -> Result<Vec<ImageSummary>, ImageError> {
        self.record(Call::ListImages);
        if self.list_fails {
            return Err(ImageError::Runtime("daemon went away".to_string()));
        }
        Ok(self.images.clone())
    }

    async fn remove_image(&self, id: &ImageId, force: bool) -> Result<(), ImageError> {
        self.record(Call::RemoveImage {
            id: id.to_string(),
            force,
        });
        if self.fails_image(id) {
            return Err(ImageError::InUse(id.to_string()));
        }
        Ok(())
    }
}
