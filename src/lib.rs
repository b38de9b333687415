//! # axum-jsonapi
//!
//! A JSON:API query-parameter parsing and permission filtering layer for
//! axum-based REST APIs in Rust.
//!
//! ## Features
//!
//! - **JSON:API Query Parsing**: `page[size]`/`page[number]` pagination,
//!   `include` paths, and `fields[type]` sparse fieldsets parsed into typed
//!   values
//! - **Pagination Links**: `self`/`first`/`previous`/`next`/`last` hyperlinks
//!   rebuilt from the original query string
//! - **Permission Guards**: reject writes whose related-object id fails a
//!   caller-supplied predicate
//! - **Permission Filters**: narrow list queries by an arbitrary transform or
//!   by membership in an externally computed allowed-id set, auto-joining
//!   relationships idempotently
//! - **Pluggable Query Seam**: filters compose over any query builder that
//!   implements [`RelationQuery`](permissions::query::RelationQuery)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum_jsonapi::prelude::*;
//!
//! let query = RequestQuery::from_uri("http://api.example.com/articles", &uri);
//!
//! // Parse JSON:API pagination
//! let pagination = SizeNumberPagination;
//! if let Some(page) = pagination.parse(&query)? {
//!     let links = pagination.links(&query, page.size, page.number, total_count);
//! }
//!
//! // Restrict a repository's list query to permitted owners
//! let repository = MemoryRepository::new(addresses)
//!     .with_filter(RelatedObjectsFilter::with_joins(
//!         "user_id",
//!         vec!["user".to_string()],
//!         move || permitted_user_ids(),
//!     ));
//! ```

pub mod core;
pub mod permissions;
pub mod query;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{JsonApiError, PermissionError, QueryStringError},
        repository::ResourceRepository,
        request::RequestQuery,
        schema::ResourceSchema,
    };

    // === Query-string parsers ===
    pub use crate::query::{
        fields::SparseFieldsParser,
        include::IncludeParser,
        pagination::{PageLinks, PageParams, SizeNumberPagination},
    };

    // === Permission layer ===
    pub use crate::permissions::{
        filter::{PermissionFilter, QueryFilter, RelatedObjectsFilter},
        guard::RelatedObjectGuard,
        query::{RelationQuery, join_relation_if_needed, join_relations_if_needed},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryTable, MemoryQuery, MemoryRepository, Row, row_id};

    // === External dependencies ===
    pub use serde_json::Value;
    pub use uuid::Uuid;
}
