//! Include-path parsing

use crate::core::error::QueryStringError;
use crate::core::request::RequestQuery;
use crate::core::schema::ResourceSchema;

const INCLUDE: &str = "include";

/// Parser for the JSON:API `include` parameter
///
/// Relation names arrive comma-separated with hyphens where the schema uses
/// underscores (`phone-numbers` → `phone_numbers`); each normalized name is
/// validated against the schema before being returned.
pub struct IncludeParser<S: ResourceSchema> {
    schema: S,
}

impl<S: ResourceSchema> IncludeParser<S> {
    pub fn new(schema: S) -> Self {
        Self { schema }
    }

    /// Parse the `include` parameter into validated relation names
    ///
    /// Absent or empty `include` yields an empty vec. Requested order is
    /// preserved.
    pub fn parse(&self, query: &RequestQuery) -> Result<Vec<String>, QueryStringError> {
        let Some(raw) = query.get(INCLUDE).filter(|value| !value.is_empty()) else {
            return Ok(Vec::new());
        };

        let relations: Vec<String> = raw
            .replace('-', "_")
            .split(',')
            .map(str::to_string)
            .collect();
        self.schema
            .check_relations(&relations)
            .map_err(QueryStringError::invalid_include)?;
        Ok(relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UserSchema;

    impl ResourceSchema for UserSchema {
        fn resource_type(&self) -> &str {
            "user"
        }

        fn relationships(&self) -> &[&str] {
            &["addresses", "phone_numbers"]
        }
    }

    fn query_with_include(value: &str) -> RequestQuery {
        RequestQuery::new(
            "http://example.com/users",
            vec![("include".to_string(), value.to_string())],
        )
    }

    #[test]
    fn test_absent_include_is_empty() {
        let parser = IncludeParser::new(UserSchema);
        let query = RequestQuery::new("http://example.com/users", vec![]);
        assert_eq!(parser.parse(&query).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_empty_include_is_empty() {
        let parser = IncludeParser::new(UserSchema);
        assert_eq!(
            parser.parse(&query_with_include("")).unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_include_normalizes_hyphens() {
        let parser = IncludeParser::new(UserSchema);
        let relations = parser
            .parse(&query_with_include("addresses,phone-numbers"))
            .unwrap();
        assert_eq!(relations, vec!["addresses", "phone_numbers"]);
    }

    #[test]
    fn test_include_preserves_requested_order() {
        let parser = IncludeParser::new(UserSchema);
        let relations = parser
            .parse(&query_with_include("phone-numbers,addresses"))
            .unwrap();
        assert_eq!(relations, vec!["phone_numbers", "addresses"]);
    }

    #[test]
    fn test_unknown_relation_carries_schema_message() {
        let parser = IncludeParser::new(UserSchema);
        let err = parser
            .parse(&query_with_include("addresses,pets"))
            .unwrap_err();
        assert_eq!(
            err,
            QueryStringError::invalid_include("Unknown relationship 'pets'")
        );
    }
}
