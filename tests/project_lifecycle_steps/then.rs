//! Then steps for project lifecycle BDD scenarios.

use super::world::{ProjectWorld, parse_status};
use rstest_bdd_macros::then;
use tracker::project::{domain::TaskId, services::ProjectBoardError};

#[then(r#"the project status is "{status}""#)]
fn project_status_is(world: &ProjectWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let id = world.project_id()?;
    let project = world
        .board
        .project(id)
        .ok_or_else(|| eyre::eyre!("project {id} is not on the board"))?;

    if project.status() != expected {
        return Err(eyre::eyre!(
            "expected project status {expected}, found {}",
            project.status()
        ));
    }
    Ok(())
}

#[then(r#"task {task_id:u64} status is "{status}""#)]
fn task_status_is(world: &ProjectWorld, task_id: u64, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let id = world.project_id()?;
    let task = world
        .board
        .project(id)
        .and_then(|project| project.task(TaskId::new(task_id)))
        .ok_or_else(|| eyre::eyre!("task {task_id} is not in project {id}"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected task status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the operation is rejected as invalid")]
fn operation_rejected(world: &ProjectWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(result, Err(ProjectBoardError::Domain(_))) {
        return Err(eyre::eyre!("expected InvalidOperation, got {result:?}"));
    }
    Ok(())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &ProjectWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected the operation to succeed, got {err}"));
    }
    Ok(())
}
