//! Admin gate middleware
//!
//! Every admin-scoped route passes through here before any repository
//! access. The gate is a pure decision over the request headers and the
//! secret configured at startup.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::domain::DomainError;
use crate::interfaces::http::common::ApiError;

/// Header carrying the caller-supplied admin key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Gate state: the secret configured at startup. `None` means the
/// deployment never set one, which makes every admin request answer 500
/// rather than leaving an accidental open door.
#[derive(Clone)]
pub struct AdminGateState {
    admin_key: Option<String>,
}

impl AdminGateState {
    /// An empty string counts as unset.
    pub fn new(admin_key: Option<String>) -> Self {
        Self {
            admin_key: admin_key.filter(|k| !k.is_empty()),
        }
    }
}

/// Require the exact configured admin key in `x-admin-key`.
pub async fn admin_gate_middleware(
    State(gate): State<AdminGateState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = gate.admin_key.as_deref() else {
        warn!("admin request rejected: no admin key configured");
        return ApiError(DomainError::Misconfigured("missing ADMIN_KEY".into())).into_response();
    };

    let supplied = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match supplied {
        Some(key) if keys_match(key, expected) => next.run(request).await,
        _ => {
            warn!(
                "admin request rejected: missing or invalid {} header",
                ADMIN_KEY_HEADER
            );
            ApiError(DomainError::Unauthorized("missing or invalid admin key".into()))
                .into_response()
        }
    }
}

/// Compare digests rather than the raw strings so the comparison cost does
/// not depend on how much of the secret matches.
fn keys_match(supplied: &str, expected: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_requires_exact_equality() {
        assert!(keys_match("s3cret", "s3cret"));
        assert!(!keys_match("s3cret", "S3cret"));
        assert!(!keys_match("s3cre", "s3cret"));
        assert!(!keys_match("", "s3cret"));
    }

    #[test]
    fn empty_configured_key_counts_as_unset() {
        let gate = AdminGateState::new(Some(String::new()));
        assert!(gate.admin_key.is_none());

        let gate = AdminGateState::new(Some("s3cret".into()));
        assert_eq!(gate.admin_key.as_deref(), Some("s3cret"));
    }
}
