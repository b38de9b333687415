//! Sparse-fieldset parsing

use crate::core::request::RequestQuery;
use crate::core::schema::ResourceSchema;

const FIELDS_PREFIX: &str = "fields";

/// Parser for the JSON:API `fields[type]=a,b,c` convention
///
/// Fields of the schema's own type are returned bare; fields of any other
/// type are prefixed as `type.field`. Repeated `fields[...]` keys accumulate
/// in encounter order, duplicates included.
pub struct SparseFieldsParser<S: ResourceSchema> {
    schema: S,
}

impl<S: ResourceSchema> SparseFieldsParser<S> {
    pub fn new(schema: S) -> Self {
        Self { schema }
    }

    /// Parse all `fields[...]` parameters into dotted field paths
    ///
    /// Returns `None` when no `fields[...]` parameter is present.
    pub fn parse(&self, query: &RequestQuery) -> Option<Vec<String>> {
        let mut sparse_fields = Vec::new();
        for (key, value) in query.iter().filter(|(k, _)| k.starts_with(FIELDS_PREFIX)) {
            let resource = key.replace("fields[", "").replace(']', "");
            let fields = value.replace('-', "_");
            if resource == self.schema.resource_type() {
                sparse_fields.extend(fields.split(',').map(str::to_string));
            } else {
                let prefix = resource.replace('-', "_");
                sparse_fields.extend(
                    fields
                        .split(',')
                        .map(|field| format!("{}.{}", prefix, field)),
                );
            }
        }

        if sparse_fields.is_empty() {
            None
        } else {
            Some(sparse_fields)
        }
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
            &["addresses"]
        }
    }

    fn query_with(pairs: &[(&str, &str)]) -> RequestQuery {
        RequestQuery::new(
            "http://example.com/users",
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_no_fields_parameters_is_none() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[("include", "addresses")]);
        assert_eq!(parser.parse(&query), None);
    }

    #[test]
    fn test_own_type_fields_kept_bare() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[("fields[user]", "name,email")]);
        assert_eq!(
            parser.parse(&query),
            Some(vec!["name".to_string(), "email".to_string()])
        );
    }

    #[test]
    fn test_other_type_fields_prefixed() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[("fields[user]", "name,email"), ("fields[address]", "city")]);
        assert_eq!(
            parser.parse(&query),
            Some(vec![
                "name".to_string(),
                "email".to_string(),
                "address.city".to_string(),
            ])
        );
    }

    #[test]
    fn test_hyphenated_type_and_fields_normalized() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[("fields[phone-number]", "country-code,number")]);
        assert_eq!(
            parser.parse(&query),
            Some(vec![
                "phone_number.country_code".to_string(),
                "phone_number.number".to_string(),
            ])
        );
    }

    #[test]
    fn test_repeated_keys_accumulate_in_encounter_order() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[
            ("fields[user]", "name"),
            ("fields[address]", "city"),
            ("fields[user]", "email"),
        ]);
        assert_eq!(
            parser.parse(&query),
            Some(vec![
                "name".to_string(),
                "address.city".to_string(),
                "email".to_string(),
            ])
        );
    }

    #[test]
    fn test_duplicate_field_paths_not_deduplicated() {
        let parser = SparseFieldsParser::new(UserSchema);
        let query = query_with(&[("fields[user]", "name"), ("fields[user]", "name")]);
        assert_eq!(
            parser.parse(&query),
            Some(vec!["name".to_string(), "name".to_string()])
        );
    }
}
