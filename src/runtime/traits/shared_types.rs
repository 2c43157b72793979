// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ContainerSummary, ContainerState, ImageSummary, RuntimeMetadata.

use crate::types::{ContainerId, ImageId};

/// Snapshot of a container as returned by a list call.
#[derive(Debug, Clone)]
pub struct ContainerSummary {
    /// Container ID.
    pub id: ContainerId,
    /// Container name, without the leading `/`.
    pub name: String,
    /// Image reference the container was created from.
    pub image: String,
    /// Current state.
    pub state: ContainerState,
}

/// Container state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    Unknown,
}

impl ContainerState {
    /// Parse the lowercase state string reported by Docker and Podman.
    pub fn parse(state: &str) -> Self {
        match state.trim().to_ascii_lowercase().as_str() {
            "created" | "configured" => Self::Created,
            "running" => Self::Running,
            "paused" => Self::Paused,
            "restarting" => Self::Restarting,
            "removing" | "stopping" => Self::Removing,
            // Podman reports "stopped" for containers Docker calls "exited"
            "exited" | "stopped" => Self::Exited,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Whether the container holds no running process.
    pub fn is_inactive(self) -> bool {
        matches!(self, Self::Paused | Self::Exited | Self::Dead)
    }
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Restarting => "restarting",
            Self::Removing => "removing",
            Self::Exited => "exited",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Snapshot of an image as returned by a list call.
#[derive(Debug, Clone)]
pub struct ImageSummary {
    /// Image ID.
    pub id: ImageId,
    /// First repository tag, or the short ID for untagged images.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Number of containers (in any state) that reference this image.
    pub containers: i64,
}

impl ImageSummary {
    /// Pick a display name from the repository tags.
    pub fn display_name(id: &ImageId, repo_tags: &[String]) -> String {
        repo_tags
            .iter()
            .find(|tag| tag.as_str() != "<none>:<none>")
            .cloned()
            .unwrap_or_else(|| id.short().to_string())
    }
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_docker_states() {
        assert_eq!(ContainerState::parse("running"), ContainerState::Running);
        assert_eq!(ContainerState::parse("exited"), ContainerState::Exited);
        assert_eq!(ContainerState::parse("PAUSED"), ContainerState::Paused);
        assert_eq!(ContainerState::parse("dead"), ContainerState::Dead);
        assert_eq!(ContainerState::parse(""), ContainerState::Unknown);
    }

    #[test]
    fn parses_podman_states() {
        assert_eq!(ContainerState::parse("stopped"), ContainerState::Exited);
        assert_eq!(ContainerState::parse("stopping"), ContainerState::Removing);
        assert_eq!(ContainerState::parse("configured"), ContainerState::Created);
    }

    #[test]
    fn only_paused_exited_and_dead_are_inactive() {
        let inactive: Vec<_> = [
            ContainerState::Created,
            ContainerState::Running,
            ContainerState::Paused,
            ContainerState::Restarting,
            ContainerState::Removing,
            ContainerState::Exited,
            ContainerState::Dead,
            ContainerState::Unknown,
        ]
        .into_iter()
        .filter(|s| s.is_inactive())
        .collect();

        assert_eq!(
            inactive,
            vec![
                ContainerState::Paused,
                ContainerState::Exited,
                ContainerState::Dead
            ]
        );
    }

    #[test]
    fn display_name_skips_dangling_tags() {
        let id = ImageId::new("sha256:aabbccddeeff00112233");
        let tags = vec!["<none>:<none>".to_string(), "nginx:1.25".to_string()];
        assert_eq!(ImageSummary::display_name(&id, &tags), "nginx:1.25");
    }

    #[test]
    fn display_name_falls_back_to_short_id() {
        let id = ImageId::new("sha256:aabbccddeeff00112233");
        assert_eq!(ImageSummary::display_name(&id, &[]), "aabbccddeeff");
    }
}
