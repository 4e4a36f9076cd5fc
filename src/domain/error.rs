//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Server misconfigured ({0})")]
    Misconfigured(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{:?}", e.code));
                    format!("{}: {}", field, msg)
                })
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        } else {
            messages.join("; ")
        };

        DomainError::Validation(message)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_includes_entity_and_id() {
        let err = DomainError::NotFound {
            entity: "Service",
            field: "id",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Not found: Service with id=abc");
    }

    #[test]
    fn validation_errors_flatten_into_field_messages() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "must not be empty"))]
            name: String,
        }

        let probe = Probe { name: String::new() };
        let err: DomainError = probe.validate().unwrap_err().into();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "name: must not be empty"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
