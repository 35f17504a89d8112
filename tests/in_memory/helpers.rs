//! Shared fixtures for in-memory board integration tests.

use rstest::fixture;
use tracker::project::{
    domain::{Project, ProjectId, Status, TaskId},
    services::ProjectBoard,
};

/// Identifier of the seeded "Rick" project.
pub const RICK: ProjectId = ProjectId::new(1);

/// Identifier of the seeded "Astley" project.
pub const ASTLEY: ProjectId = ProjectId::new(2);

/// Builds a project whose tasks are numbered from 1 in slice order.
///
/// # Errors
///
/// Returns an error if two tasks share an identifier.
pub fn project_with_tasks(
    id: ProjectId,
    name: &str,
    status: Status,
    tasks: &[(&str, Status)],
) -> Result<Project, eyre::Report> {
    let mut project = Project::new(id, name, status);
    for (task_id, (task_name, task_status)) in (1..).zip(tasks) {
        project.add_task(TaskId::new(task_id), *task_name, *task_status)?;
    }
    Ok(project)
}

/// Provides a board with an active and a new project.
///
/// # Errors
///
/// Returns an error if the seed projects cannot be assembled.
#[fixture]
pub fn seeded_board() -> Result<ProjectBoard, eyre::Report> {
    let mut board = ProjectBoard::new();
    board.insert(project_with_tasks(
        RICK,
        "Rick",
        Status::Active,
        &[
            ("Never", Status::New),
            ("Gonna", Status::New),
            ("Give", Status::Closed),
            ("You", Status::Active),
            ("Up", Status::Active),
        ],
    )?)?;
    board.insert(project_with_tasks(
        ASTLEY,
        "Astley",
        Status::New,
        &[("Let", Status::New), ("Down", Status::New)],
    )?)?;
    Ok(board)
}
