//! Task back-references resolved through the board.

use super::helpers::{ASTLEY, RICK, seeded_board};
use eyre::{bail, ensure};
use rstest::rstest;
use tracker::project::{
    domain::{InvalidOperation, Project, ProjectId, Status, Task, TaskId},
    ports::ProjectLookup,
    services::ProjectBoard,
};

#[rstest]
fn board_resolves_every_registered_project(
    seeded_board: Result<ProjectBoard, eyre::Report>,
) -> eyre::Result<()> {
    let board = seeded_board?;

    ensure!(board.project_status(RICK) == Some(Status::Active));
    ensure!(board.project_status(ASTLEY) == Some(Status::New));
    ensure!(board.project_status(ProjectId::new(3)).is_none());
    Ok(())
}

#[rstest]
fn detached_task_starts_against_board_lookup(
    seeded_board: Result<ProjectBoard, eyre::Report>,
) -> eyre::Result<()> {
    let board = seeded_board?;
    let mut task = Task::new(TaskId::new(10), RICK, "Run around", Status::New);

    task.start(&board)?;

    ensure!(task.status() == Status::Active);
    ensure!(task.project(&board) == Some(Status::Active));
    Ok(())
}

#[rstest]
fn detached_task_of_unknown_project_cannot_start(
    seeded_board: Result<ProjectBoard, eyre::Report>,
) -> eyre::Result<()> {
    let board = seeded_board?;
    let orphan = ProjectId::new(99);
    let mut task = Task::new(TaskId::new(1), orphan, "Desert you", Status::Closed);

    let result = task.start(&board);

    let Err(InvalidOperation::ProjectNotActive { project_status, .. }) = result else {
        bail!("expected ProjectNotActive, got {result:?}");
    };
    ensure!(project_status.is_none());
    ensure!(task.status() == Status::Closed);
    Ok(())
}

#[rstest]
fn deserialized_project_starts_its_own_tasks() -> eyre::Result<()> {
    let json = r#"{"id":5,"name":"Rick","status":"active","tasks":[
        {"id":1,"name":"Never","status":"new","project_id":5}
    ]}"#;
    let project: Project = serde_json::from_str(json)?;
    let mut board = ProjectBoard::new();
    board.insert(project)?;

    ensure!(board.start_task(ProjectId::new(5), TaskId::new(1))? == Status::Active);
    Ok(())
}
