//! Error types for project and task lifecycle guards.

use super::{ProjectId, Status, TaskId};
use thiserror::Error;

/// A lifecycle operation was rejected by its guard.
///
/// Guards run before any mutation, so the entity keeps the status it had
/// when the operation was attempted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidOperation {
    /// Only active or already closed projects can be finished.
    #[error("cannot finish a project that is New or Removed (project {project_id} is {status})")]
    ProjectNotFinishable {
        /// Project that was asked to finish.
        project_id: ProjectId,
        /// Status observed by the guard.
        status: Status,
    },

    /// An active project still owns a task that is new or active.
    #[error("cannot close a project with tasks still open (project {project_id}, task {task_id} is {task_status})")]
    OpenTasksRemain {
        /// Project that was asked to finish.
        project_id: ProjectId,
        /// First open task found in the project's task order.
        task_id: TaskId,
        /// Status of that task.
        task_status: Status,
    },

    /// Only closed or already removed projects can be removed.
    #[error("cannot remove a project that is New or Active (project {project_id} is {status})")]
    ProjectNotRemovable {
        /// Project that was asked to be removed.
        project_id: ProjectId,
        /// Status observed by the guard.
        status: Status,
    },

    /// The owning project is not active, or is unknown to the lookup.
    #[error("cannot start a task without an active project (task {task_id}, project {project_id})")]
    ProjectNotActive {
        /// Task that was asked to start.
        task_id: TaskId,
        /// Owning project.
        project_id: ProjectId,
        /// Project status observed, `None` when the lookup had no entry.
        project_status: Option<Status>,
    },

    /// Only active or already closed tasks can be finished.
    #[error("cannot finish a task that is New or Removed (task {task_id} is {status})")]
    TaskNotFinishable {
        /// Task that was asked to finish.
        task_id: TaskId,
        /// Status observed by the guard.
        status: Status,
    },

    /// Only closed or already removed tasks can be removed.
    #[error("cannot remove a task that is New or Active (task {task_id} is {status})")]
    TaskNotRemovable {
        /// Task that was asked to be removed.
        task_id: TaskId,
        /// Status observed by the guard.
        status: Status,
    },
}

/// Errors returned while assembling a project and its tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project already owns a task with this identifier.
    #[error("project {project_id} already has a task with id {task_id}")]
    DuplicateTask {
        /// Project receiving the task.
        project_id: ProjectId,
        /// Conflicting task identifier.
        task_id: TaskId,
    },

    /// A closed or removed project cannot take on a new or active task.
    #[error(
        "project {project_id} is {project_status} and cannot own task {task_id} in status {task_status}"
    )]
    OpenTaskInSettledProject {
        /// Project receiving the task.
        project_id: ProjectId,
        /// Status of the project.
        project_status: Status,
        /// Rejected task identifier.
        task_id: TaskId,
        /// Status of the rejected task.
        task_status: Status,
    },

    /// A task record names a different owning project.
    #[error("task {task_id} belongs to project {owner_id}, not project {project_id}")]
    ForeignTask {
        /// Project being assembled.
        project_id: ProjectId,
        /// Task carrying the mismatched owner.
        task_id: TaskId,
        /// Owner named by the task record.
        owner_id: ProjectId,
    },
}

/// Error returned while parsing a status name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);
