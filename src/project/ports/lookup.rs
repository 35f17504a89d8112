//! Read-only project lookup used by tasks to validate against their owner.

use crate::project::domain::{ProjectId, Status};

/// Resolves a project's current status from its identifier.
///
/// Tasks hold only the identifier of their owning project; this accessor is
/// supplied at call time instead of a pointer back to the project.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectLookup {
    /// Returns the status of project `id`, or `None` when it is unknown.
    fn project_status(&self, id: ProjectId) -> Option<Status>;
}
