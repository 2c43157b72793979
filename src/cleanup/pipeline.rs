// ABOUTME: The list -> filter -> prompt -> act workflow shared by every verb.
// ABOUTME: Short-circuits with a message when nothing is listed, eligible or selected.

use super::batch::{Action, ActionOutcome, apply};
use super::filter::filter;
use super::resource::Resource;
use super::select::{SelectError, Selector, choose};
use crate::output::Output;
use std::io::Write;

/// User-facing text for one verb.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// Prompt title.
    pub title: &'static str,
    /// Shown when the list call returned nothing.
    pub none_found: &'static str,
    /// Shown when nothing passed the eligibility filter.
    pub none_eligible: &'static str,
}

/// Shown when the user confirms the prompt without picking anything.
pub const NOTHING_SELECTED: &str = "Nothing selected.";

/// How a pipeline run ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The list call returned no resources.
    NoneFound,
    /// Resources exist but none passed the filter.
    NoneEligible,
    /// The prompt was confirmed with an empty selection.
    NothingSelected,
    /// The action ran once per selected resource.
    Applied(Vec<ActionOutcome>),
}

impl PipelineOutcome {
    /// Outcomes of the applied actions, empty for the short-circuit cases.
    pub fn outcomes(&self) -> &[ActionOutcome] {
        match self {
            PipelineOutcome::Applied(outcomes) => outcomes,
            _ => &[],
        }
    }
}

/// Filter a freshly listed snapshot, prompt for targets and act on them.
///
/// Only a failing prompt is an error; per-item action failures are reported
/// through `output` and recorded in the returned outcomes.
pub async fn run<R, A, W>(
    listed: Vec<R>,
    eligible: impl Fn(&R) -> bool,
    messages: &Messages,
    selector: &mut dyn Selector,
    action: &A,
    output: &mut Output<W>,
) -> Result<PipelineOutcome, SelectError>
where
    R: Resource + Sync,
    A: Action<R> + ?Sized,
    W: Write,
{
    if listed.is_empty() {
        output.progress(messages.none_found);
        return Ok(PipelineOutcome::NoneFound);
    }

    let total = listed.len();
    let candidates = filter(listed, eligible);
    tracing::debug!(
        total,
        eligible = candidates.len(),
        kind = R::KIND,
        "filtered resources"
    );

    if candidates.is_empty() {
        output.progress(messages.none_eligible);
        return Ok(PipelineOutcome::NoneEligible);
    }

    let selected = choose(selector, messages.title, &candidates)?;
    if selected.is_empty() {
        output.progress(NOTHING_SELECTED);
        return Ok(PipelineOutcome::NothingSelected);
    }

    let outcomes = apply(&selected, action, output).await;
    Ok(PipelineOutcome::Applied(outcomes))
}
