use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, jwk::JwkSet};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::domain::{
    authentication::{ports::IdentityVerifier, value_objects::Identity},
    common::entities::app_errors::CoreError,
};

const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];
const KEYS_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Deserialize)]
struct GoogleClaims {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<Value>,
}

impl GoogleClaims {
    fn email_verified(&self) -> bool {
        match &self.email_verified {
            Some(Value::Bool(verified)) => *verified,
            Some(Value::String(verified)) => verified != "false",
            _ => true,
        }
    }

    fn into_identity(self) -> Result<Identity, CoreError> {
        if !self.email_verified() {
            tracing::warn!("Rejecting Google token with unverified e-mail");
            return Err(CoreError::Unauthenticated);
        }

        Identity::from_email(self.email.as_deref())
    }
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Verifies Google-issued ID tokens (RS256) against Google's published keys.
#[derive(Clone)]
pub struct GoogleIdTokenVerifier {
    client_id: String,
    jwks_url: String,
    client: Client,
    keys: Arc<RwLock<Option<CachedKeys>>>,
}

impl GoogleIdTokenVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            jwks_url: GOOGLE_JWKS_URL.to_string(),
            client: Client::new(),
            keys: Arc::new(RwLock::new(None)),
        }
    }

    async fn fetch_keys(&self) -> Result<JwkSet, CoreError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!("Failed to fetch Google signing keys: {}", e);
                CoreError::InternalServerError
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::error!("Google signing keys are not a valid JWK set: {}", e);
            CoreError::InternalServerError
        })
    }

    /// Decoding key for `kid`, refreshing the cached set when it is stale or
    /// does not know the key yet.
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, CoreError> {
        {
            let cached = self.keys.read().await;
            let fresh = cached
                .as_ref()
                .filter(|cached| cached.fetched_at.elapsed() < KEYS_TTL)
                .and_then(|cached| cached.keys.find(kid));
            if let Some(jwk) = fresh {
                return DecodingKey::from_jwk(jwk).map_err(|_| CoreError::Unauthenticated);
            }
        }

        let keys = self.fetch_keys().await?;
        let key = keys
            .find(kid)
            .map(DecodingKey::from_jwk)
            .transpose()
            .map_err(|_| CoreError::Unauthenticated)?;

        *self.keys.write().await = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });

        key.ok_or_else(|| {
            tracing::warn!(kid = %kid, "Token signed with an unknown key");
            CoreError::Unauthenticated
        })
    }
}

impl IdentityVerifier for GoogleIdTokenVerifier {
    #[instrument(skip(self, token))]
    async fn verify(&self, token: &str) -> Result<Identity, CoreError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Malformed ID token: {}", e);
            CoreError::Unauthenticated
        })?;
        let kid = header.kid.ok_or(CoreError::Unauthenticated)?;
        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.client_id.as_str()]);
        validation.set_issuer(&GOOGLE_ISSUERS);

        let data = decode::<GoogleClaims>(token, &key, &validation).map_err(|e| {
            tracing::warn!("Rejected ID token: {}", e);
            CoreError::Unauthenticated
        })?;

        data.claims.into_identity()
    }
}
