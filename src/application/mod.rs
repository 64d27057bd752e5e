//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates the read path: fetch a snapshot through the
//! ports, apply the caller's scope, roll the pruned tree up, and shape
//! the result for presentation. Following CQRS there are only query
//! handlers here; the engine never writes.

pub mod handlers;

pub use handlers::{
    GetCustomerComplianceHandler, GetCustomerComplianceQuery, GetHealthOverviewHandler,
    GetHealthOverviewQuery, HealthQueryError,
};
