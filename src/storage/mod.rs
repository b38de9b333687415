//! Storage backends
//!
//! Only an in-memory backend ships with the crate; real persistence layers
//! implement [`RelationQuery`](crate::permissions::query::RelationQuery) and
//! [`ResourceRepository`](crate::core::repository::ResourceRepository) over
//! their own query builders.

pub mod in_memory;

pub use in_memory::{InMemoryTable, MemoryQuery, MemoryRepository, Row, row_id};
