//! In-memory storage backend for testing and development

use crate::core::error::JsonApiError;
use crate::core::repository::ResourceRepository;
use crate::permissions::filter::QueryFilter;
use crate::permissions::guard::RelatedObjectGuard;
use crate::permissions::query::RelationQuery;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A stored record: a flat JSON object map
///
/// Ids are stored under `"id"` as UUID strings; foreign keys are plain
/// attributes (`"user_id"`) holding the referenced row's UUID string.
pub type Row = Map<String, Value>;

/// Extract a row's UUID from its `"id"` attribute
pub fn row_id(row: &Row) -> Option<Uuid> {
    row.get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}

/// In-memory table of rows
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// insertion order is preserved so listings are deterministic.
#[derive(Clone, Default)]
pub struct InMemoryTable {
    rows: Arc<RwLock<IndexMap<Uuid, Row>>>,
}

impl InMemoryTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, generating an id and created_at timestamp when absent
    pub fn insert(&self, mut row: Row) -> Result<Row> {
        let id = row_id(&row).unwrap_or_else(Uuid::new_v4);
        row.insert("id".to_string(), Value::String(id.to_string()));
        row.entry("created_at")
            .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));

        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        rows.insert(id, row.clone());

        Ok(row)
    }

    /// Get a row by id
    pub fn get(&self, id: &Uuid) -> Result<Option<Row>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.get(id).cloned())
    }

    /// Snapshot all rows in insertion order
    pub fn snapshot(&self) -> Result<Vec<Row>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.values().cloned().collect())
    }

    /// Number of stored rows
    pub fn len(&self) -> Result<usize> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.len())
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Query builder over a row snapshot
///
/// Joins are recorded in an explicit joined-relation set; in this backend a
/// join does not change the row set, it only gates the idempotent-join check
/// used by stacked permission filters.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuery {
    rows: Vec<Row>,
    joined: Vec<String>,
}

impl MemoryQuery {
    /// Create a query over a row snapshot
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            joined: Vec::new(),
        }
    }

    /// Keep only rows matching the predicate
    pub fn filter(mut self, predicate: impl Fn(&Row) -> bool) -> Self {
        self.rows.retain(|row| predicate(row));
        self
    }

    /// The query's joined-relation set, in join order
    pub fn joined_relations(&self) -> &[String] {
        &self.joined
    }

    /// Consume the query, yielding the remaining rows
    pub fn rows(self) -> Vec<Row> {
        self.rows
    }
}

impl RelationQuery for MemoryQuery {
    type Id = Uuid;

    fn join_relation(mut self, relation: &str) -> Self {
        tracing::debug!(relation = %relation, "joining relation");
        self.joined.push(relation.to_string());
        self
    }

    fn has_joined(&self, relation: &str) -> bool {
        self.joined.iter().any(|r| r == relation)
    }

    fn filter_ids_in(self, attribute: &str, ids: &[Uuid]) -> Self {
        let attribute = attribute.to_string();
        let ids = ids.to_vec();
        self.filter(move |row| {
            row.get(&attribute)
                .and_then(Value::as_str)
                .and_then(|s| Uuid::parse_str(s).ok())
                .is_some_and(|id| ids.contains(&id))
        })
    }
}

/// In-memory repository with attachable permission policies
///
/// A [`RelatedObjectGuard`] attached via [`with_create_guard`](Self::with_create_guard)
/// runs before every `create`; a rejected create performs no write. Query
/// filters attached via [`with_filter`](Self::with_filter) fold over the base
/// query in attachment order.
pub struct MemoryRepository {
    table: InMemoryTable,
    create_guard: Option<RelatedObjectGuard>,
    filters: Vec<Box<dyn QueryFilter<MemoryQuery>>>,
}

impl MemoryRepository {
    /// Create a repository over the given table
    pub fn new(table: InMemoryTable) -> Self {
        Self {
            table,
            create_guard: None,
            filters: Vec::new(),
        }
    }

    /// Attach a related-object guard to `create`
    pub fn with_create_guard(mut self, guard: RelatedObjectGuard) -> Self {
        self.create_guard = Some(guard);
        self
    }

    /// Attach a query filter; filters apply in attachment order
    pub fn with_filter(mut self, filter: impl QueryFilter<MemoryQuery> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

#[async_trait]
impl ResourceRepository for MemoryRepository {
    type Query = MemoryQuery;

    async fn create(&self, data: Value) -> Result<Value, JsonApiError> {
        if let Some(guard) = &self.create_guard {
            guard.check(&data)?;
        }

        let Value::Object(row) = data else {
            return Err(JsonApiError::Storage(anyhow!(
                "create payload must be a JSON object"
            )));
        };

        let row = self.table.insert(row)?;
        Ok(Value::Object(row))
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Value>, JsonApiError> {
        Ok(self.table.get(id)?.map(Value::Object))
    }

    fn query(&self) -> Result<MemoryQuery, JsonApiError> {
        let base = MemoryQuery::new(self.table.snapshot()?);
        Ok(self
            .filters
            .iter()
            .fold(base, |query, filter| filter.apply(query)))
    }

    async fn list(&self) -> Result<Vec<Value>, JsonApiError> {
        Ok(self.query()?.rows().into_iter().map(Value::Object).collect())
    }
}
