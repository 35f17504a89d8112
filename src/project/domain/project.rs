//! Project entity, the owner of an ordered task collection.

use super::{InvalidOperation, ProjectDomainError, ProjectId, Status, Task, TaskId};
use crate::project::ports::ProjectLookup;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A project and the tasks it owns.
///
/// Deserialisation rebuilds the project through [`Project::add_task`], so a
/// payload cannot bypass the task collection rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    name: String,
    status: Status,
    tasks: Vec<Task>,
}

/// Wire shape of a project before its task collection is validated.
#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    status: Status,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectDomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let mut project = Self::new(record.id, record.name, record.status);
        for task in record.tasks {
            if task.project_id() != project.id {
                return Err(ProjectDomainError::ForeignTask {
                    project_id: project.id,
                    task_id: task.id(),
                    owner_id: task.project_id(),
                });
            }
            project.add_task(task.id(), task.name(), task.status())?;
        }
        Ok(project)
    }
}

/// Point-in-time view of a project's identity and status.
///
/// Used to start a task held inside the same project: the snapshot is
/// taken first, then the task is borrowed mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    /// Project identifier.
    pub id: ProjectId,
    /// Project status when the snapshot was taken.
    pub status: Status,
}

impl ProjectLookup for ProjectRef {
    fn project_status(&self, id: ProjectId) -> Option<Status> {
        (self.id == id).then_some(self.status)
    }
}

impl Project {
    /// Creates a project with no tasks.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>, status: Status) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            tasks: Vec::new(),
        }
    }

    /// Appends a task owned by this project.
    ///
    /// Returns the project so fixtures can chain calls.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateTask`] when a task with `id`
    /// already exists, and [`ProjectDomainError::OpenTaskInSettledProject`]
    /// when an open task is added to a closed or removed project. The
    /// collection is left unchanged.
    pub fn add_task(
        &mut self,
        id: TaskId,
        name: impl Into<String>,
        status: Status,
    ) -> Result<&mut Self, ProjectDomainError> {
        if self.task(id).is_some() {
            return Err(ProjectDomainError::DuplicateTask {
                project_id: self.id,
                task_id: id,
            });
        }
        if self.status.is_settled() && status.is_open() {
            return Err(ProjectDomainError::OpenTaskInSettledProject {
                project_id: self.id,
                project_status: self.status,
                task_id: id,
                task_status: status,
            });
        }
        self.tasks.push(Task::new(id, self.id, name, status));
        Ok(self)
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
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

    /// Returns the owned tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds an owned task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds an owned task by identifier for a lifecycle operation.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Iterates over tasks that are still new or active.
    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.status().is_open())
    }

    /// Takes a snapshot of the project's identity and status.
    #[must_use]
    pub const fn to_ref(&self) -> ProjectRef {
        ProjectRef {
            id: self.id,
            status: self.status,
        }
    }

    /// Starts the project, whatever its current status.
    pub fn start(&mut self) {
        self.apply(Status::Active);
    }

    /// Finishes the project. Finishing a closed project is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::ProjectNotFinishable`] when the project
    /// is [`Status::New`] or [`Status::Removed`], and
    /// [`InvalidOperation::OpenTasksRemain`] when an active project still
    /// owns a task that is new or active.
    pub fn finish(&mut self) -> Result<(), InvalidOperation> {
        match self.status {
            Status::New | Status::Removed => Err(InvalidOperation::ProjectNotFinishable {
                project_id: self.id,
                status: self.status,
            }),
            Status::Active => {
                if let Some(open) = self.open_tasks().next() {
                    return Err(InvalidOperation::OpenTasksRemain {
                        project_id: self.id,
                        task_id: open.id(),
                        task_status: open.status(),
                    });
                }
                self.apply(Status::Closed);
                Ok(())
            }
            Status::Closed => Ok(()),
        }
    }

    /// Removes the project. Removing a removed project is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation::ProjectNotRemovable`] when the project
    /// is [`Status::New`] or [`Status::Active`].
    pub fn remove(&mut self) -> Result<(), InvalidOperation> {
        if self.status.is_open() {
            return Err(InvalidOperation::ProjectNotRemovable {
                project_id: self.id,
                status: self.status,
            });
        }
        self.apply(Status::Removed);
        Ok(())
    }

    fn apply(&mut self, to: Status) {
        debug!(
            project_id = %self.id,
            from = %self.status,
            to = %to,
            "project status changed"
        );
        self.status = to;
    }
}

impl ProjectLookup for Project {
    fn project_status(&self, id: ProjectId) -> Option<Status> {
        (self.id == id).then_some(self.status)
    }
}
