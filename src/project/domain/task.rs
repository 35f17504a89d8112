//! Task entity and its lifecycle operations.

use super::{InvalidOperation, ProjectId, Status, TaskId};
use crate::project::ports::ProjectLookup;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unit of work owned by exactly one project.
///
/// The task refers to its project by identifier only. Operations that need
/// the project's state read it through a [`ProjectLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    status: Status,
    project_id: ProjectId,
}

impl Task {
    /// Creates a task in the given status, owned by `project_id`.
    #[must_use]
    pub fn new(
        id: TaskId,
        project_id: ProjectId,
        name: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            project_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the identifier of the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Reads the owning project's status through `projects`.
    ///
    /// Returns `None` when the lookup does not know the project.
    #[must_use]
    pub fn project(&self, projects: &impl ProjectLookup) -> Option<Status> {
        projects.project_status(self.project_id)
    }

    /// Starts the task.
    ///
    /// The task's own prior status is not checked: any task of an active
    /// project may be (re)started.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::ProjectNotActive`] when the owning
    /// project is not [`Status::Active`] or is unknown to `projects`.
    pub fn start(&mut self, projects: &impl ProjectLookup) -> Result<(), InvalidOperation> {
        let project_status = self.project(projects);
        if project_status != Some(Status::Active) {
            return Err(InvalidOperation::ProjectNotActive {
                task_id: self.id,
                project_id: self.project_id,
                project_status,
            });
        }
        self.apply(Status::Active);
        Ok(())
    }

    /// Finishes the task. Finishing a closed task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::TaskNotFinishable`] when the task is
    /// [`Status::New`] or [`Status::Removed`].
    pub fn finish(&mut self) -> Result<(), InvalidOperation> {
        match self.status {
            Status::New | Status::Removed => Err(InvalidOperation::TaskNotFinishable {
                task_id: self.id,
                status: self.status,
            }),
            Status::Active | Status::Closed => {
                self.apply(Status::Closed);
                Ok(())
            }
        }
    }

    /// Removes the task. Removing a removed task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::TaskNotRemovable`] when the task is
    /// [`Status::New`] or [`Status::Active`].
    pub fn remove(&mut self) -> Result<(), InvalidOperation> {
        if self.status.is_open() {
            return Err(InvalidOperation::TaskNotRemovable {
                task_id: self.id,
                status: self.status,
            });
        }
        self.apply(Status::Removed);
        Ok(())
    }

    fn apply(&mut self, to: Status) {
        debug!(
            project_id = %self.project_id,
            task_id = %self.id,
            from = %self.status,
            to = %to,
            "task status changed"
        );
        self.status = to;
    }
}
