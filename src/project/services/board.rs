//! In-memory board that holds projects and routes operations by identifier.

use crate::project::{
    domain::{InvalidOperation, Project, ProjectId, Status, TaskId},
    ports::ProjectLookup,
};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectBoardError {
    /// A lifecycle guard rejected the operation.
    #[error(transparent)]
    Domain(#[from] InvalidOperation),

    /// A project with the same identifier is already on the board.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// No project with this identifier is on the board.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project exists but owns no task with this identifier.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project that was searched.
        project_id: ProjectId,
        /// Missing task identifier.
        task_id: TaskId,
    },
}

/// Result type for board operations.
pub type ProjectBoardResult<T> = Result<T, ProjectBoardError>;

/// Single-owner registry of projects, iterated in identifier order.
///
/// The board does not validate transitions itself. It locates the entity
/// and delegates to the domain operation, so the guards stay in one place.
#[derive(Debug, Clone, Default)]
pub struct ProjectBoard {
    projects: BTreeMap<ProjectId, Project>,
}

impl ProjectBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project to the board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::DuplicateProject`] when the identifier
    /// is already taken.
    pub fn insert(&mut self, project: Project) -> ProjectBoardResult<()> {
        let id = project.id();
        if self.projects.contains_key(&id) {
            return Err(ProjectBoardError::DuplicateProject(id));
        }
        self.projects.insert(id, project);
        Ok(())
    }

    /// Returns the project with `id`, if present.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Iterates over all projects in identifier order.
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Returns the number of projects on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when the board holds no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Starts a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] for an unknown id.
    pub fn start_project(&mut self, id: ProjectId) -> ProjectBoardResult<&Project> {
        let project = self.project_mut(id)?;
        project.start();
        Ok(project)
    }

    /// Finishes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] for an unknown id and
    /// [`ProjectBoardError::Domain`] when the finish guard rejects it.
    pub fn finish_project(&mut self, id: ProjectId) -> ProjectBoardResult<&Project> {
        let project = self.project_mut(id)?;
        project.finish().inspect_err(log_rejection)?;
        Ok(project)
    }

    /// Removes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] for an unknown id and
    /// [`ProjectBoardError::Domain`] when the remove guard rejects it.
    pub fn remove_project(&mut self, id: ProjectId) -> ProjectBoardResult<&Project> {
        let project = self.project_mut(id)?;
        project.remove().inspect_err(log_rejection)?;
        Ok(project)
    }

    /// Starts a task of a project on the board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] or
    /// [`ProjectBoardError::TaskNotFound`] when either id is unknown, and
    /// [`ProjectBoardError::Domain`] when the project is not active.
    pub fn start_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> ProjectBoardResult<Status> {
        let project = self.project_mut(project_id)?;
        let owner = project.to_ref();
        let task = project
            .task_mut(task_id)
            .ok_or(ProjectBoardError::TaskNotFound {
                project_id,
                task_id,
            })?;
        task.start(&owner).inspect_err(log_rejection)?;
        Ok(task.status())
    }

    /// Finishes a task of a project on the board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] or
    /// [`ProjectBoardError::TaskNotFound`] when either id is unknown, and
    /// [`ProjectBoardError::Domain`] when the finish guard rejects it.
    pub fn finish_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> ProjectBoardResult<Status> {
        let task = self
            .project_mut(project_id)?
            .task_mut(task_id)
            .ok_or(ProjectBoardError::TaskNotFound {
                project_id,
                task_id,
            })?;
        task.finish().inspect_err(log_rejection)?;
        Ok(task.status())
    }

    /// Removes a task of a project on the board.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectBoardError::ProjectNotFound`] or
    /// [`ProjectBoardError::TaskNotFound`] when either id is unknown, and
    /// [`ProjectBoardError::Domain`] when the remove guard rejects it.
    pub fn remove_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> ProjectBoardResult<Status> {
        let task = self
            .project_mut(project_id)?
            .task_mut(task_id)
            .ok_or(ProjectBoardError::TaskNotFound {
                project_id,
                task_id,
            })?;
        task.remove().inspect_err(log_rejection)?;
        Ok(task.status())
    }

    fn project_mut(&mut self, id: ProjectId) -> ProjectBoardResult<&mut Project> {
        self.projects
            .get_mut(&id)
            .ok_or(ProjectBoardError::ProjectNotFound(id))
    }
}

impl ProjectLookup for ProjectBoard {
    fn project_status(&self, id: ProjectId) -> Option<Status> {
        self.project(id).map(Project::status)
    }
}

fn log_rejection(err: &InvalidOperation) {
    debug!(error = %err, "lifecycle operation rejected");
}
