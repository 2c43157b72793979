// ABOUTME: Interactive bulk cleanup of containers and images.
// ABOUTME: List, filter to eligible resources, prompt for a subset, then act per item.

mod batch;
mod filter;
mod pipeline;
mod resource;
pub(crate) mod select;
mod verbs;

pub use batch::{Action, ActionError, ActionKind, ActionOutcome, apply};
pub use filter::{filter, removable_container, removable_image, stop_eligible};
pub use pipeline::{Messages, NOTHING_SELECTED, PipelineOutcome, run};
pub use resource::{Resource, format_size};
pub use select::{SelectError, SelectionCandidate, Selector, candidates, choose};
pub use verbs::{QueryError, RemoveOptions, Verb, dispatch};
