// ABOUTME: Eligibility predicates for each cleanup verb.
// ABOUTME: Narrows a listed snapshot to the resources that may be offered.

use crate::runtime::{ContainerSummary, ImageSummary};

/// Keep the resources matching `predicate`, preserving their relative order.
pub fn filter<R>(resources: Vec<R>, predicate: impl Fn(&R) -> bool) -> Vec<R> {
    resources.into_iter().filter(|r| predicate(r)).collect()
}

/// Every listed container may be stopped; the list call already restricts
/// the snapshot to running ones.
pub fn stop_eligible(_container: &ContainerSummary) -> bool {
    true
}

/// Containers that are paused, exited or dead, or any container when
/// `include_active` is set.
pub fn removable_container(container: &ContainerSummary, include_active: bool) -> bool {
    include_active || container.state.is_inactive()
}

/// Images no container references, or any image when `include_in_use` is set.
pub fn removable_image(image: &ImageSummary, include_in_use: bool) -> bool {
    include_in_use || image.containers <= 0
}
