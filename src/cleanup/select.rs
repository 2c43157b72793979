// ABOUTME: Selection candidates and the prompt contract.
// ABOUTME: Renders aligned labels and maps the user's picks back to resources.

use super::resource::Resource;

/// A resource paired with the label shown for it in the prompt.
#[derive(Debug)]
pub struct SelectionCandidate<'a, R> {
    pub resource: &'a R,
    pub label: String,
}

/// Build one candidate per resource.
///
/// Names are left-aligned and padded to the longest name so that the
/// secondary column lines up: `web      | nginx:1.25`.
pub fn candidates<R: Resource>(resources: &[R]) -> Vec<SelectionCandidate<'_, R>> {
    let width = resources
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(0);

    resources
        .iter()
        .map(|resource| SelectionCandidate {
            resource,
            label: format!("{:<width$} | {}", resource.name(), resource.detail()),
        })
        .collect()
}

/// Errors from the selection prompt.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("selection cancelled")]
    Cancelled,

    #[error("selection prompt failed: {0}")]
    Terminal(String),
}

/// Interactive multi-select over a list of labels.
pub trait Selector {
    /// Show `labels` under `title` and return the indices the user picked.
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Vec<usize>, SelectError>;
}

/// Prompt for a subset of `resources`.
///
/// The result is in candidate (list) order regardless of the order in which
/// the user toggled items. Duplicate or out-of-range indices from the
/// selector are dropped, so a resource is never returned twice.
pub fn choose<'a, R: Resource>(
    selector: &mut dyn Selector,
    title: &str,
    resources: &'a [R],
) -> Result<Vec<&'a R>, SelectError> {
    let candidates = candidates(resources);
    let labels: Vec<String> = candidates.iter().map(|c| c.label.clone()).collect();

    let mut picked = selector.select(title, &labels)?;
    picked.sort_unstable();
    picked.dedup();

    Ok(picked
        .into_iter()
        .filter_map(|i| candidates.get(i).map(|c| c.resource))
        .collect())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Selector that answers with a fixed script and remembers what it was shown.
    pub struct ScriptedSelector {
        answer: Option<Vec<usize>>,
        pub shown: Vec<(String, Vec<String>)>,
    }

    impl ScriptedSelector {
        pub fn picking(indices: &[usize]) -> Self {
            Self {
                answer: Some(indices.to_vec()),
                shown: Vec::new(),
            }
        }

        pub fn cancelling() -> Self {
            Self {
                answer: None,
                shown: Vec::new(),
            }
        }

        pub fn prompted(&self) -> bool {
            !self.shown.is_empty()
        }
    }

    impl Selector for ScriptedSelector {
        fn select(&mut self, title: &str, labels: &[String]) -> Result<Vec<usize>, SelectError> {
            self.shown.push((title.to_string(), labels.to_vec()));
            self.answer.clone().ok_or(SelectError::Cancelled)
        }
    }
}
