//! Scope module - Structural filtering of the hierarchy.
//!
//! Filters prune the snapshot itself rather than hiding rows: a branch
//! survives only while it keeps at least one matching leaf, and every
//! ancestor aggregate is then recomputed from the pruned children. A
//! percentage shown under an active filter is the filtered aggregate,
//! not the global one.

mod filter;

pub use filter::{ScopeContext, ScopeFilter};
