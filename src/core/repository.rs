//! Repository seam for resource persistence access
//!
//! Repositories own the persistence calls this crate decorates. The trait is
//! deliberately narrow: permission guards hook the mutating side (`create`)
//! and permission filters hook query construction (`query`), so those are the
//! only operations the layer needs to see.

use crate::core::error::JsonApiError;
use crate::permissions::query::RelationQuery;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Persistence-access object for a single resource type
///
/// Implementations are expected to run any attached
/// [`RelatedObjectGuard`](crate::permissions::guard::RelatedObjectGuard)
/// before writing in `create`, and to fold any attached
/// [`QueryFilter`](crate::permissions::filter::QueryFilter)s over the base
/// query in `query`.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// The query-builder type this repository constructs
    type Query: RelationQuery;

    /// Create a new record from a JSON object payload
    async fn create(&self, data: Value) -> Result<Value, JsonApiError>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> Result<Option<Value>, JsonApiError>;

    /// Build the (permission-filtered) list query
    ///
    /// Query construction is synchronous: it composes a builder, it does not
    /// touch the datastore.
    fn query(&self) -> Result<Self::Query, JsonApiError>;

    /// List all records visible through [`query`](Self::query)
    async fn list(&self) -> Result<Vec<Value>, JsonApiError>;
}
