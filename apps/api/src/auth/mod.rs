//! Caller authentication against the identity collaborator (Supabase Auth).
//!
//! This service never issues tokens. It forwards the inbound bearer token and
//! trusts whatever identity the collaborator resolves it to.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::models::user::CallerIdentity;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed Authorization header")]
    MissingBearer,

    #[error("identity request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identity collaborator rejected the token (status {0})")]
    Rejected(u16),
}

/// Resolves a bearer token to a caller identity.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, bearer: &str) -> Result<CallerIdentity, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingBearer)
}

/// Resolves tokens via `GET {base}/auth/v1/user`.
#[derive(Clone)]
pub struct SupabaseIdentityResolver {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseIdentityResolver {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            anon_key,
        }
    }

    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl IdentityResolver for SupabaseIdentityResolver {
    async fn resolve(&self, bearer: &str) -> Result<CallerIdentity, AuthError> {
        let response = self
            .client
            .get(self.user_endpoint())
            .bearer_auth(bearer)
            .header("apikey", &self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Identity collaborator returned {status}");
            return Err(AuthError::Rejected(status.as_u16()));
        }

        Ok(response.json::<CallerIdentity>().await?)
    }
}
