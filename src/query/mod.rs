//! JSON:API query-string parsers
//!
//! Translates raw HTTP query parameters into typed values:
//! pagination (`page[size]`/`page[number]`), include paths (`include=a,b`)
//! and sparse fieldsets (`fields[type]=a,b`).

pub mod fields;
pub mod include;
pub mod pagination;

pub use fields::SparseFieldsParser;
pub use include::IncludeParser;
pub use pagination::{PageLinks, PageParams, SizeNumberPagination};
