//! Permission filters for list queries

use crate::permissions::query::{RelationQuery, join_relations_if_needed};

/// A policy object that narrows a repository's list query
///
/// Repositories fold their attached filters over the base query when
/// constructing it; filters therefore see the query after any earlier filter
/// has been applied.
pub trait QueryFilter<Q: RelationQuery>: Send + Sync {
    /// Apply this filter to the query, returning the narrowed query
    fn apply(&self, query: Q) -> Q;
}

/// Generic permission filter: pre-join relationships, then apply an
/// arbitrary query transform
///
/// This is the general form; [`RelatedObjectsFilter`] is the specialization
/// where the transform is "filter by id membership".
pub struct PermissionFilter<Q> {
    relationships: Vec<String>,
    filter_method: Box<dyn Fn(Q) -> Q + Send + Sync>,
}

impl<Q: RelationQuery> PermissionFilter<Q> {
    /// Filter with a transform only, no pre-joins
    pub fn new(filter_method: impl Fn(Q) -> Q + Send + Sync + 'static) -> Self {
        Self::with_joins(Vec::new(), filter_method)
    }

    /// Filter with a transform, pre-joining the given relationships
    pub fn with_joins(
        relationships: Vec<String>,
        filter_method: impl Fn(Q) -> Q + Send + Sync + 'static,
    ) -> Self {
        Self {
            relationships,
            filter_method: Box::new(filter_method),
        }
    }
}

impl<Q: RelationQuery> QueryFilter<Q> for PermissionFilter<Q> {
    fn apply(&self, query: Q) -> Q {
        let query = join_relations_if_needed(query, &self.relationships);
        (self.filter_method)(query)
    }
}

/// Restrict a dependent resource's query to rows whose foreign key belongs
/// to an externally computed allowed-id set
///
/// The id set is produced lazily at query time by a zero-argument callable,
/// typically "ids from another repository's permitted list". This composes
/// the dependent resource's authorization with the independent resource's
/// without duplicating the latter's logic.
pub struct RelatedObjectsFilter<Q: RelationQuery> {
    attribute: String,
    relationships: Vec<String>,
    permitted_ids: Box<dyn Fn() -> Vec<Q::Id> + Send + Sync>,
}

impl<Q: RelationQuery> RelatedObjectsFilter<Q> {
    /// Restrict `attribute` to the ids produced by `permitted_ids`
    pub fn new(
        attribute: impl Into<String>,
        permitted_ids: impl Fn() -> Vec<Q::Id> + Send + Sync + 'static,
    ) -> Self {
        Self::with_joins(attribute, Vec::new(), permitted_ids)
    }

    /// Same, pre-joining the given relationships before filtering
    pub fn with_joins(
        attribute: impl Into<String>,
        relationships: Vec<String>,
        permitted_ids: impl Fn() -> Vec<Q::Id> + Send + Sync + 'static,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            relationships,
            permitted_ids: Box::new(permitted_ids),
        }
    }
}

impl<Q: RelationQuery> QueryFilter<Q> for RelatedObjectsFilter<Q> {
    fn apply(&self, query: Q) -> Q {
        let query = join_relations_if_needed(query, &self.relationships);
        let ids = (self.permitted_ids)();
        tracing::debug!(
            attribute = %self.attribute,
            permitted = ids.len(),
            "filtering by related-objects permission"
        );
        query.filter_ids_in(&self.attribute, &ids)
    }
}
