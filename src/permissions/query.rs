//! Query-builder seam for permission filters
//!
//! Filters compose over any query builder that can join a relationship,
//! report which relationships are already joined, and restrict rows by id
//! membership. The joined set is explicit state on the builder, which makes
//! repeated filter application safe when stacking multiple filters on the
//! same base query.

/// Query-builder operations the permission filters rely on
///
/// Methods take and return `Self`: ownership of the builder transfers from
/// caller to the returned value, mirroring how ORM builders chain.
pub trait RelationQuery: Sized {
    /// Foreign-key id type rows are restricted by
    type Id: Clone + PartialEq;

    /// Join the given relationship onto the query
    fn join_relation(self, relation: &str) -> Self;

    /// Whether the given relationship is already in the query's join set
    fn has_joined(&self, relation: &str) -> bool;

    /// Restrict to rows whose `attribute` is a member of `ids`
    fn filter_ids_in(self, attribute: &str, ids: &[Self::Id]) -> Self;
}

/// Join a relationship only if the query is not already joined on it
pub fn join_relation_if_needed<Q: RelationQuery>(query: Q, relation: &str) -> Q {
    if query.has_joined(relation) {
        query
    } else {
        query.join_relation(relation)
    }
}

/// Join each relationship in order, skipping ones already joined
pub fn join_relations_if_needed<Q, R>(mut query: Q, relations: &[R]) -> Q
where
    Q: RelationQuery,
    R: AsRef<str>,
{
    for relation in relations {
        query = join_relation_if_needed(query, relation.as_ref());
    }
    query
}
