// ABOUTME: Sequential per-item execution of a cleanup action.
// ABOUTME: Reports each outcome as it happens and never aborts on a failed item.

use super::resource::Resource;
use crate::output::Output;
use crate::runtime::{ContainerError, ImageError};
use async_trait::async_trait;
use std::io::Write;

/// The lifecycle operation a batch applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Stop,
    Remove,
}

impl ActionKind {
    /// Infinitive, as in "Failed to stop".
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Stop => "stop",
            ActionKind::Remove => "remove",
        }
    }

    /// Capitalised past tense, as in "Stopped container web".
    pub fn past(self) -> &'static str {
        match self {
            ActionKind::Stop => "Stopped",
            ActionKind::Remove => "Removed",
        }
    }
}

/// Failure of a single stop or remove call.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// An operation applied to one resource at a time.
#[async_trait]
pub trait Action<R: Sync>: Send + Sync {
    fn kind(&self) -> ActionKind;

    async fn run(&self, resource: &R) -> Result<(), ActionError>;
}

/// Result of applying an action to one resource.
#[derive(Debug)]
pub struct ActionOutcome {
    pub id: String,
    pub name: String,
    pub error: Option<ActionError>,
}

impl ActionOutcome {
    pub fn success(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            error: None,
        }
    }

    pub fn failure(id: impl Into<String>, name: impl Into<String>, error: ActionError) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            error: Some(error),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply `action` to every selected resource, strictly in order.
///
/// Each outcome is printed as soon as it is known. A failed item is logged
/// and reported, then the batch moves on; nothing already done is undone.
pub async fn apply<R, A, W>(
    selected: &[&R],
    action: &A,
    output: &mut Output<W>,
) -> Vec<ActionOutcome>
where
    R: Resource + Sync,
    A: Action<R> + ?Sized,
    W: Write,
{
    let kind = action.kind();
    let mut outcomes = Vec::with_capacity(selected.len());

    for resource in selected {
        let outcome = match action.run(resource).await {
            Ok(()) => {
                tracing::debug!(
                    id = resource.id(),
                    name = resource.name(),
                    "{} {}",
                    kind.past(),
                    R::KIND
                );
                ActionOutcome::success(resource.id(), resource.name())
            }
            Err(e) => {
                tracing::debug!(
                    id = resource.id(),
                    name = resource.name(),
                    error = %e,
                    "failed to {} {}",
                    kind.verb(),
                    R::KIND
                );
                ActionOutcome::failure(resource.id(), resource.name(), e)
            }
        };

        output.outcome(kind, R::KIND, &outcome);
        outcomes.push(outcome);
    }

    outcomes
}
