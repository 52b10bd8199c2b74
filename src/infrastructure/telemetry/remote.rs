//! HTTP delivery for telemetry entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{LogEntry, LogSink, is_allowed_package};
use crate::config::TelemetryConfig;

/// Fallback token lifetime when the auth response carries no `expires_in`.
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Credentials posted to the auth endpoint to obtain a bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthCredentials {
    pub email: String,
    pub name: String,
    #[serde(rename = "rollNo")]
    pub roll_no: String,
    #[serde(rename = "accessCode")]
    pub access_code: String,
    #[serde(rename = "clientID")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    expires_in: Option<u64>,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Lazily refreshed bearer-token cache.
///
/// The mutex is held across a refresh, so concurrent callers wait on the
/// in-flight auth request instead of issuing their own.
pub struct CredentialCache {
    auth_url: String,
    credentials: AuthCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl CredentialCache {
    pub fn new(auth_url: String, credentials: AuthCredentials) -> Self {
        Self {
            auth_url,
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Returns a valid bearer token, refreshing on demand.
    ///
    /// Returns `None` when the auth endpoint is unreachable or answers with
    /// an unexpected body; the caller then sends without authorization.
    pub async fn token(&self, client: &reqwest::Client) -> Option<String> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref()
            && Instant::now() < entry.expires_at
        {
            return Some(entry.token.clone());
        }

        let response = client
            .post(&self.auth_url)
            .json(&self.credentials)
            .send()
            .await
            .ok()?;

        let auth: AuthResponse = response.json().await.ok()?;
        let ttl = Duration::from_secs(auth.expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS));

        *cached = Some(CachedToken {
            token: auth.access_token.clone(),
            expires_at: Instant::now() + ttl,
        });

        Some(auth.access_token)
    }
}

struct Transport {
    client: reqwest::Client,
    log_url: String,
    auth: CredentialCache,
}

impl Transport {
    async fn deliver(&self, entry: LogEntry) {
        let token = self.auth.token(&self.client).await;

        let mut request = self.client.post(&self.log_url).json(&entry);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Err(e) = request.send().await {
            tracing::debug!("telemetry delivery failed: {e}");
        }
    }
}

/// [`LogSink`] that ships entries to a remote collector.
///
/// Entries failing the package allow-list are dropped locally. Accepted
/// entries are dispatched on a background task; auth and delivery failures
/// are swallowed there.
pub struct RemoteLogSink {
    transport: Arc<Transport>,
}

impl RemoteLogSink {
    pub fn new(config: TelemetryConfig) -> Self {
        Self {
            transport: Arc::new(Transport {
                client: reqwest::Client::new(),
                log_url: config.log_url,
                auth: CredentialCache::new(config.auth_url, config.credentials),
            }),
        }
    }
}

impl LogSink for RemoteLogSink {
    fn emit(&self, entry: LogEntry) {
        if !is_allowed_package(entry.stack, &entry.package) {
            tracing::warn!(
                package = %entry.package,
                "telemetry entry dropped: package not allowed for stack"
            );
            return;
        }

        let transport = self.transport.clone();
        tokio::spawn(async move {
            transport.deliver(entry).await;
        });
    }
}
