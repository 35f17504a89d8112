//! Domain model for project and task lifecycles.
//!
//! Projects and tasks share one [`Status`] enumeration. Each entity guards
//! and applies its own transitions; a project may only close once every
//! task it owns is closed or removed.

mod error;
mod ids;
mod project;
mod status;
mod task;

pub use error::{InvalidOperation, ParseStatusError, ProjectDomainError};
pub use ids::{ProjectId, TaskId};
pub use project::{Project, ProjectRef};
pub use status::Status;
pub use task::Task;
