// ABOUTME: Maps each cleanup verb to its list scope, eligibility filter and action.
// ABOUTME: Holds the stop/remove action adapters over the runtime traits.

use super::batch::{Action, ActionError, ActionKind};
use super::filter::{removable_container, removable_image, stop_eligible};
use super::pipeline::{Messages, PipelineOutcome, run};
use super::select::Selector;
use crate::error::Error;
use crate::output::Output;
use crate::runtime::{
    ContainerError, ContainerFilters, ContainerOps, ContainerSummary, FullRuntime, ImageError,
    ImageOps, ImageSummary,
};
use async_trait::async_trait;
use std::io::Write;
use std::time::Duration;

/// Failure to list the resources a verb works on.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to list containers: {0}")]
    Containers(#[source] ContainerError),

    #[error("failed to list images: {0}")]
    Images(#[source] ImageError),
}

/// Options for the remove verbs.
///
/// `--force` sets both fields; they are kept apart because one widens what
/// is offered while the other changes how the runtime removes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Offer resources that are running or still referenced.
    pub include_in_use: bool,
    /// Ask the runtime to remove even when the resource is in use.
    pub force: bool,
}

impl RemoveOptions {
    pub fn from_force_flag(force: bool) -> Self {
        Self {
            include_in_use: force,
            force,
        }
    }
}

/// A cleanup command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Stop running containers, with an optional grace period.
    Stop { timeout: Option<Duration> },
    /// Remove inactive containers.
    RemoveContainers(RemoveOptions),
    /// Remove unused images.
    RemoveImages(RemoveOptions),
}

const STOP: Messages = Messages {
    title: "Select the containers to STOP",
    none_found: "No running containers found.",
    // The list call only returns running containers, so every one is eligible.
    none_eligible: "No running containers found.",
};

const REMOVE_CONTAINERS: Messages = Messages {
    title: "Select the containers to REMOVE",
    none_found: "No containers found.",
    none_eligible: "No inactive containers found.",
};

const REMOVE_IMAGES: Messages = Messages {
    title: "Select the images to REMOVE",
    none_found: "No images found.",
    none_eligible: "No unused images found.",
};

/// Run `verb` against `runtime`: list, filter, prompt, act.
pub async fn dispatch<R, W>(
    runtime: &R,
    verb: Verb,
    selector: &mut dyn Selector,
    output: &mut Output<W>,
) -> Result<PipelineOutcome, Error>
where
    R: FullRuntime,
    W: Write,
{
    tracing::debug!(?verb, "dispatching");

    let outcome = match verb {
        Verb::Stop { timeout } => {
            let listed = runtime
                .list_containers(&ContainerFilters::running())
                .await
                .map_err(QueryError::Containers)?;
            let action = StopContainer { runtime, timeout };
            run(listed, stop_eligible, &STOP, selector, &action, output).await?
        }
        Verb::RemoveContainers(opts) => {
            let listed = runtime
                .list_containers(&ContainerFilters::all())
                .await
                .map_err(QueryError::Containers)?;
            let action = RemoveContainer {
                runtime,
                force: opts.force,
            };
            run(
                listed,
                |c| removable_container(c, opts.include_in_use),
                &REMOVE_CONTAINERS,
                selector,
                &action,
                output,
            )
            .await?
        }
        Verb::RemoveImages(opts) => {
            let listed = runtime
                .list_images(true)
                .await
                .map_err(QueryError::Images)?;
            let action = RemoveImage {
                runtime,
                force: opts.force,
            };
            run(
                listed,
                |i| removable_image(i, opts.include_in_use),
                &REMOVE_IMAGES,
                selector,
                &action,
                output,
            )
            .await?
        }
    };

    let failed = outcome.outcomes().iter().filter(|o| !o.succeeded()).count();
    if failed > 0 {
        tracing::debug!(
            failed,
            attempted = outcome.outcomes().len(),
            "some actions failed"
        );
    }

    Ok(outcome)
}

// =============================================================================
// Actions
// =============================================================================

struct StopContainer<'a, R> {
    runtime: &'a R,
    timeout: Option<Duration>,
}

#[async_trait]
impl<R: ContainerOps> Action<ContainerSummary> for StopContainer<'_, R> {
    fn kind(&self) -> ActionKind {
        ActionKind::Stop
    }

    async fn run(&self, container: &ContainerSummary) -> Result<(), ActionError> {
        self.runtime
            .stop_container(&container.id, self.timeout)
            .await
            .map_err(ActionError::from)
    }
}

struct RemoveContainer<'a, R> {
    runtime: &'a R,
    force: bool,
}

#[async_trait]
impl<R: ContainerOps> Action<ContainerSummary> for RemoveContainer<'_, R> {
    fn kind(&self) -> ActionKind {
        ActionKind::Remove
    }

    async fn run(&self, container: &ContainerSummary) -> Result<(), ActionError> {
        self.runtime
            .remove_container(&container.id, self.force)
            .await
            .map_err(ActionError::from)
    }
}

struct RemoveImage<'a, R> {
    runtime: &'a R,
    force: bool,
}

#[async_trait]
impl<R: ImageOps> Action<ImageSummary> for RemoveImage<'_, R> {
    fn kind(&self) -> ActionKind {
        ActionKind::Remove
    }

    async fn run(&self, image: &ImageSummary) -> Result<(), ActionError> {
        self.runtime
            .remove_image(&image.id, self.force)
            .await
            .map_err(ActionError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::select::testing::ScriptedSelector;
    use crate::runtime::ContainerState;
    use crate::runtime::fake::{Call, FakeRuntime};

    fn text(output: Output<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn stop_reports_partial_failure_without_error() {
        let runtime = FakeRuntime::new()
            .with_container("web", ContainerState::Running)
            .with_container("db", ContainerState::Running)
            .with_container("cache", ContainerState::Running)
            .failing_on("db");
        let mut selector = ScriptedSelector::picking(&[0, 1]);
        let mut output = Output::new(Vec::new());

        let outcome = dispatch(
            &runtime,
            Verb::Stop { timeout: None },
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        assert_eq!(outcome.outcomes().len(), 2);
        assert_eq!(
            text(output),
            "✓ Stopped container web\n✗ Failed to stop container db\n"
        );
        assert_eq!(
            runtime.calls(),
            vec![
                Call::ListContainers { all: false },
                Call::Stop("web-id".to_string()),
                Call::Stop("db-id".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failed_item_does_not_skip_later_items() {
        let runtime = FakeRuntime::new()
            .with_container("a", ContainerState::Exited)
            .with_container("b", ContainerState::Exited)
            .with_container("c", ContainerState::Exited)
            .failing_on("a");
        let mut selector = ScriptedSelector::picking(&[0, 1, 2]);
        let mut output = Output::new(Vec::new());

        let outcome = dispatch(
            &runtime,
            Verb::RemoveContainers(RemoveOptions::default()),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        let succeeded: Vec<_> = outcome.outcomes().iter().map(|o| o.succeeded()).collect();
        assert_eq!(succeeded, vec![false, true, true]);
    }

    #[tokio::test]
    async fn remove_containers_offers_only_inactive_without_force() {
        let runtime = FakeRuntime::new()
            .with_container("api", ContainerState::Running)
            .with_container("job", ContainerState::Exited)
            .with_container("debug", ContainerState::Paused);
        let mut selector = ScriptedSelector::picking(&[]);
        let mut output = Output::new(Vec::new());

        dispatch(
            &runtime,
            Verb::RemoveContainers(RemoveOptions::from_force_flag(false)),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        let (title, labels) = &selector.shown[0];
        assert_eq!(title, "Select the containers to REMOVE");
        assert_eq!(labels.len(), 2);
        assert!(labels[0].starts_with("job"));
        assert!(labels[1].starts_with("debug"));
        assert_eq!(text(output), "Nothing selected.\n");
    }

    #[tokio::test]
    async fn forced_container_removal_passes_force_through() {
        let runtime = FakeRuntime::new().with_container("api", ContainerState::Running);
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());

        dispatch(
            &runtime,
            Verb::RemoveContainers(RemoveOptions::from_force_flag(true)),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        assert!(runtime.calls().contains(&Call::RemoveContainer {
            id: "api-id".to_string(),
            force: true,
        }));
    }

    #[tokio::test]
    async fn forced_image_removal_offers_referenced_images() {
        let runtime = FakeRuntime::new().with_image("nginx:1.25", 2);
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());

        dispatch(
            &runtime,
            Verb::RemoveImages(RemoveOptions::from_force_flag(true)),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        assert_eq!(selector.shown[0].1, vec!["nginx:1.25 | 5.00 MB"]);
        assert!(runtime.calls().contains(&Call::RemoveImage {
            id: "sha256:nginx:1.25".to_string(),
            force: true,
        }));
        assert_eq!(text(output), "✓ Removed image nginx:1.25\n");
    }

    #[tokio::test]
    async fn widening_without_forcing_is_representable() {
        let runtime = FakeRuntime::new().with_image("nginx:1.25", 2);
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());
        let opts = RemoveOptions {
            include_in_use: true,
            force: false,
        };

        dispatch(&runtime, Verb::RemoveImages(opts), &mut selector, &mut output)
            .await
            .unwrap();

        assert!(runtime.calls().contains(&Call::RemoveImage {
            id: "sha256:nginx:1.25".to_string(),
            force: false,
        }));
    }

    #[tokio::test]
    async fn referenced_images_are_not_offered_without_force() {
        let runtime = FakeRuntime::new().with_image("nginx:1.25", 2);
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());

        let outcome = dispatch(
            &runtime,
            Verb::RemoveImages(RemoveOptions::default()),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        assert!(matches!(outcome, PipelineOutcome::NoneEligible));
        assert!(!selector.prompted());
        assert_eq!(text(output), "No unused images found.\n");
    }

    #[tokio::test]
    async fn empty_listing_skips_prompt() {
        let runtime = FakeRuntime::new();
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());

        let outcome = dispatch(
            &runtime,
            Verb::RemoveContainers(RemoveOptions::default()),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap();

        assert!(matches!(outcome, PipelineOutcome::NoneFound));
        assert!(!selector.prompted());
        assert_eq!(text(output), "No containers found.\n");
    }

    #[tokio::test]
    async fn none_found_and_none_eligible_messages_differ() {
        let empty = FakeRuntime::new();
        let running = FakeRuntime::new().with_container("api", ContainerState::Running);
        let verb = Verb::RemoveContainers(RemoveOptions::default());

        let mut first = Output::new(Vec::new());
        dispatch(&empty, verb, &mut ScriptedSelector::picking(&[]), &mut first)
            .await
            .unwrap();
        let mut second = Output::new(Vec::new());
        dispatch(&running, verb, &mut ScriptedSelector::picking(&[]), &mut second)
            .await
            .unwrap();

        assert_ne!(text(first), text(second));
    }

    #[tokio::test]
    async fn listing_failure_is_a_query_error() {
        let runtime = FakeRuntime::new().unreachable();
        let mut selector = ScriptedSelector::picking(&[0]);
        let mut output = Output::new(Vec::new());

        let err = dispatch(
            &runtime,
            Verb::RemoveImages(RemoveOptions::default()),
            &mut selector,
            &mut output,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Query(QueryError::Images(_))));
        assert!(!selector.prompted());
    }

    #[tokio::test]
    async fn cancelling_the_prompt_acts_on_nothing() {
        let runtime = FakeRuntime::new().with_container("web", ContainerState::Running);
        let mut selector = ScriptedSelector::cancelling();
        let mut output = Output::new(Vec::new());

        let err = dispatch(
            &runtime,
            Verb::Stop { timeout: None },
            &mut selector,
            &mut output,
        )
        .await
        .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(runtime.calls(), vec![Call::ListContainers { all: false }]);
    }
}
