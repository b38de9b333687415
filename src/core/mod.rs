//! Core types shared by the query parsers and the permission layer

pub mod error;
pub mod repository;
pub mod request;
pub mod schema;

pub use error::{JsonApiError, PermissionError, QueryStringError};
pub use repository::ResourceRepository;
pub use request::RequestQuery;
pub use schema::ResourceSchema;
