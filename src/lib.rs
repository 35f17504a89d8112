//! Tracker: project and task lifecycle model.
//!
//! This crate models a project that owns an ordered collection of tasks,
//! with both moving between the `new`, `active`, `closed` and `removed`
//! statuses under guard rules.
//!
//! # Architecture
//!
//! Tracker follows hexagonal architecture principles:
//!
//! - **Domain**: Pure lifecycle rules with no infrastructure dependencies
//! - **Ports**: Abstract accessors the domain reads through
//! - **Services**: Identifier-based routing over an in-memory board
//!
//! # Modules
//!
//! - [`project`]: Projects, tasks, and their lifecycle guards

pub mod project;
