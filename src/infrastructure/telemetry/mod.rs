//! Fire-and-forget telemetry sink.
//!
//! Entries are shipped to a remote collector with bearer-token auth, or
//! dropped by [`NullSink`] when the sink is not configured. Emission never
//! blocks the request path and delivery failures never propagate.

pub mod remote;

pub use remote::{AuthCredentials, CredentialCache, RemoteLogSink};

use serde::Serialize;
use serde_json::Value;

/// Originating stack of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Packages the backend stack may log under.
const BACKEND_PACKAGES: &[&str] = &[
    "cache",
    "controller",
    "cron_job",
    "db",
    "domain",
    "handler",
    "repository",
    "route",
    "service",
];

/// Packages the frontend stack may log under.
const FRONTEND_PACKAGES: &[&str] = &["api", "component", "hook", "page", "state", "style"];

/// Packages valid for either stack.
const SHARED_PACKAGES: &[&str] = &["auth", "config", "middleware", "utils"];

/// Returns whether `package` may be logged under `stack`.
pub fn is_allowed_package(stack: Stack, package: &str) -> bool {
    if SHARED_PACKAGES.contains(&package) {
        return true;
    }

    match stack {
        Stack::Backend => BACKEND_PACKAGES.contains(&package),
        Stack::Frontend => FRONTEND_PACKAGES.contains(&package),
    }
}

/// A single telemetry record in the collector's wire format.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub stack: Stack,
    pub level: LogLevel,
    pub package: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, package: &str, message: impl Into<String>) -> Self {
        Self {
            stack: Stack::Backend,
            level,
            package: package.to_string(),
            message: message.into(),
            meta: None,
        }
    }

    pub fn info(package: &str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, package, message)
    }

    pub fn warn(package: &str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, package, message)
    }

    pub fn error(package: &str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, package, message)
    }

    /// Attaches structured context to the entry.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Destination for telemetry entries.
///
/// Implementations must never block the caller; all delivery errors are
/// swallowed at the sink boundary.
pub trait LogSink: Send + Sync {
    fn emit(&self, entry: LogEntry);
}

/// No-op sink used when telemetry is not configured.
pub struct NullSink;

impl LogSink for NullSink {
    fn emit(&self, _entry: LogEntry) {}
}
