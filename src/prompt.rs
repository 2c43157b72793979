// ABOUTME: Terminal multi-select prompt backed by dialoguer.
// ABOUTME: Space toggles an item, Enter confirms, Esc or q cancels.

use crate::cleanup::{SelectError, Selector};
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;

/// Interactive checkbox list rendered on the terminal.
pub struct TerminalSelector {
    theme: ColorfulTheme,
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Vec<usize>, SelectError> {
        // dialoguer returns the checked indices in list order.
        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(title)
            .items(labels)
            .interact_opt()
            .map_err(|e| SelectError::Terminal(e.to_string()))?;

        picked.ok_or(SelectError::Cancelled)
    }
}
