//! Application services for routing lifecycle operations by identifier.

mod board;

pub use board::{ProjectBoard, ProjectBoardError, ProjectBoardResult};
