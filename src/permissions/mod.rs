//! Permission guards and filters for repository operations
//!
//! Two wrapping behaviors, composed into repositories as policy objects:
//!
//! - [`RelatedObjectGuard`](guard::RelatedObjectGuard) checks a payload's
//!   related-object id against a predicate before a write proceeds
//! - [`PermissionFilter`](filter::PermissionFilter) and
//!   [`RelatedObjectsFilter`](filter::RelatedObjectsFilter) narrow a list
//!   query, auto-joining needed relationships idempotently

pub mod filter;
pub mod guard;
pub mod query;

pub use filter::{PermissionFilter, QueryFilter, RelatedObjectsFilter};
pub use guard::RelatedObjectGuard;
pub use query::{RelationQuery, join_relation_if_needed, join_relations_if_needed};
