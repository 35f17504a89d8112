//! Port contracts for project lifecycle management.
//!
//! Ports define the accessors the domain needs from its surroundings.

pub mod lookup;

pub use lookup::ProjectLookup;

#[cfg(test)]
pub use lookup::MockProjectLookup;
