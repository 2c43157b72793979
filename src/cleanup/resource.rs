// ABOUTME: Common view over listed runtime resources.
// ABOUTME: Gives containers and images an ID, a display name and a secondary column.

use crate::runtime::{ContainerSummary, ImageSummary};

/// A resource that can be offered for selection and acted upon.
pub trait Resource {
    /// Lowercase noun used in reports.
    const KIND: &'static str;

    /// Runtime identifier, unique within the runtime.
    fn id(&self) -> &str;

    /// Name shown to the user.
    fn name(&self) -> &str;

    /// Secondary attribute shown next to the name.
    fn detail(&self) -> String;
}

impl Resource for ContainerSummary {
    const KIND: &'static str = "container";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        self.image.clone()
    }
}

impl Resource for ImageSummary {
    const KIND: &'static str = "image";

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        format_size(self.size)
    }
}

/// Size in mebibytes with two decimals, e.g. `187.42 MB`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
