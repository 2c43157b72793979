// ABOUTME: Runtime type definitions for Docker and Podman.
// ABOUTME: Includes RuntimeType enum, the daemon Endpoint, RuntimeInfo and RuntimeConfig.

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl RuntimeType {
    /// Guess the runtime from a socket path or daemon address.
    pub fn from_address(address: &str) -> Self {
        if address.contains("podman") {
            RuntimeType::Podman
        } else {
            RuntimeType::Docker
        }
    }
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// Where the daemon API is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Local unix socket path.
    Unix(String),
    /// Plain HTTP address, `tcp://host:port` or `http://host:port`.
    Http(String),
}

impl Endpoint {
    /// The socket path or address, for guessing the runtime type.
    pub fn address(&self) -> &str {
        match self {
            Endpoint::Unix(path) => path,
            Endpoint::Http(addr) => addr,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Unix(path) => write!(f, "unix://{}", path),
            Endpoint::Http(addr) => write!(f, "{}", addr),
        }
    }
}

/// Detected runtime information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// The type of runtime detected.
    pub runtime_type: RuntimeType,
    /// Where to reach the runtime.
    pub endpoint: Endpoint,
}

/// Explicit runtime override, taken from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Explicit runtime type (overrides auto-detection).
    pub runtime: Option<RuntimeType>,
    /// Daemon address: `unix:///path`, a bare socket path, `tcp://` or `http://`.
    pub host: Option<String>,
}
