//! Resource schema seam
//!
//! The serialization layer owns the actual schema definitions; the parsers
//! only need the resource's JSON:API type name and a way to validate
//! relationship names. Implement [`ResourceSchema`] on whatever type carries
//! that information.

/// Minimal view of a JSON:API resource schema
pub trait ResourceSchema: Send + Sync {
    /// The resource's JSON:API type name (e.g. `"user"`)
    fn resource_type(&self) -> &str;

    /// The relationship names this resource exposes
    fn relationships(&self) -> &[&str];

    /// Validate requested relation names against [`relationships`](Self::relationships)
    ///
    /// Returns the underlying validation message for the first unknown
    /// relation, which the include parser surfaces verbatim.
    fn check_relations(&self, relations: &[String]) -> Result<(), String> {
        for relation in relations {
            if !self.relationships().contains(&relation.as_str()) {
                return Err(format!("Unknown relationship '{}'", relation));
            }
        }
        Ok(())
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

    #[test]
    fn test_known_relations_pass() {
        let schema = UserSchema;
        let relations = vec!["addresses".to_string(), "phone_numbers".to_string()];
        assert!(schema.check_relations(&relations).is_ok());
    }

    #[test]
    fn test_unknown_relation_names_offender() {
        let schema = UserSchema;
        let relations = vec!["addresses".to_string(), "pets".to_string()];
        let err = schema.check_relations(&relations).unwrap_err();
        assert_eq!(err, "Unknown relationship 'pets'");
    }
}
