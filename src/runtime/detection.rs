// ABOUTME: Runtime detection logic for the local system.
// ABOUTME: Honors an explicit host or runtime, then checks Podman sockets first, then Docker.

use super::types::{Endpoint, RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,

    #[error("unsupported daemon address {0:?} (expected unix://, tcp:// or http://)")]
    UnsupportedHost(String),
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect the container runtime on the local system.
///
/// Resolution order:
/// 1. Explicit host (`--host` / `DOCKER_HOST`)
/// 2. Explicit runtime type, using its default socket
/// 3. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 4. Rootful Podman socket (`/run/podman/podman.sock`)
/// 5. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: &RuntimeConfig) -> Result<RuntimeInfo, DetectionError> {
    if let Some(host) = config.host.as_deref() {
        let endpoint = endpoint_from_host(host)?;
        let runtime_type = config
            .runtime
            .unwrap_or_else(|| RuntimeType::from_address(endpoint.address()));
        return Ok(RuntimeInfo {
            runtime_type,
            endpoint,
        });
    }

    if let Some(runtime_type) = config.runtime {
        return Ok(RuntimeInfo {
            runtime_type,
            endpoint: Endpoint::Unix(default_socket_path(runtime_type)),
        });
    }

    // 1. Rootless Podman
    if let Some(rootless_socket) = rootless_podman_socket()
        && Path::new(&rootless_socket).exists()
    {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            endpoint: Endpoint::Unix(rootless_socket),
        });
    }

    // 2. Rootful Podman
    if Path::new(ROOTFUL_PODMAN).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            endpoint: Endpoint::Unix(ROOTFUL_PODMAN.to_string()),
        });
    }

    // 3. Docker
    if Path::new(DOCKER_SOCKET).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            endpoint: Endpoint::Unix(DOCKER_SOCKET.to_string()),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

/// Turn a daemon address into an endpoint.
///
/// `unix://` and bare paths stay on the local socket; `tcp://` and `http://`
/// go over plain HTTP. Other schemes (`ssh://`, `https://`, `npipe://`) are
/// not supported.
pub fn endpoint_from_host(host: &str) -> Result<Endpoint, DetectionError> {
    let host = host.trim();
    let unsupported = || DetectionError::UnsupportedHost(host.to_string());

    match host.split_once("://") {
        Some((_, "")) => Err(unsupported()),
        Some(("unix", path)) => Ok(Endpoint::Unix(path.to_string())),
        Some(("tcp" | "http", _)) => Ok(Endpoint::Http(host.to_string())),
        Some(_) => Err(unsupported()),
        None if host.is_empty() => Err(unsupported()),
        None => Ok(Endpoint::Unix(host.to_string())),
    }
}

fn rootless_podman_socket() -> Option<String> {
    get_uid().map(|uid| format!("/run/user/{}/podman/podman.sock", uid))
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => rootless_podman_socket()
            .filter(|path| Path::new(path).exists())
            .unwrap_or_else(|| ROOTFUL_PODMAN.to_string()),
    }
}
