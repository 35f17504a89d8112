//! Project and task lifecycle tracking.
//!
//! A project owns an ordered collection of tasks, and both move through the
//! `new`, `active`, `closed` and `removed` statuses under guard rules. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;
