//! Related-object permission guard

use serde_json::Value;

use crate::core::error::PermissionError;

/// Guards a repository's mutating operation against related-object writes
/// the caller is not permitted to reference
///
/// The guard extracts a named attribute from the input payload and asks a
/// caller-supplied predicate whether the id is permitted. An absent or falsy
/// attribute skips the check entirely: the absence of a foreign key is not
/// itself a violation.
pub struct RelatedObjectGuard {
    attribute: String,
    has_permission: Box<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl RelatedObjectGuard {
    /// Guard `attribute` with the given permission predicate
    pub fn new(
        attribute: impl Into<String>,
        has_permission: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            has_permission: Box::new(has_permission),
        }
    }

    /// Check the payload before a write proceeds
    ///
    /// Fails with [`PermissionError::Forbidden`] naming the offending id when
    /// the predicate rejects it; the wrapped write must not run in that case.
    pub fn check(&self, payload: &Value) -> Result<(), PermissionError> {
        let Some(id) = payload.get(&self.attribute).filter(|v| is_truthy(v)) else {
            return Ok(());
        };

        if !(self.has_permission)(id) {
            tracing::debug!(
                attribute = %self.attribute,
                id = %id,
                "related-object permission rejected"
            );
            return Err(PermissionError::forbidden(id_string(id)));
        }
        Ok(())
    }
}

/// Render an id for the error detail without JSON string quoting
fn id_string(id: &Value) -> String {
    match id.as_str() {
        Some(s) => s.to_string(),
        None => id.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
