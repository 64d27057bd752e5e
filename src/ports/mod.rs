//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The engine itself is a pure, synchronous read path; only the
//! collaborator boundaries are async, because fetching the snapshot
//! and engagement data is I/O owned by the persistence layer.

mod engagement_reader;
mod hierarchy_reader;

pub use engagement_reader::{EngagementReadError, EngagementReader};
pub use hierarchy_reader::{HierarchyReadError, HierarchyReader};
