//! Selector for the concrete adapter a factory should construct.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AssemblyError;

/// Closed set of adapter variants.
///
/// Each factory supports a subset:
/// - rate providers: `Memory`, `RemoteApi`
/// - cache stores: `Memory`, `Redis`
/// - product storage: `Memory`, `Sql`
///
/// Asking a factory for a variant it does not build is an
/// [`AssemblyError::UnsupportedSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Process-local data, no IO
    Memory,
    /// Third-party REST API
    RemoteApi,
    /// Relational database
    Sql,
    /// Redis server
    Redis,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Memory => "memory",
            ProviderKind::RemoteApi => "api",
            ProviderKind::Sql => "sql",
            ProviderKind::Redis => "redis",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(ProviderKind::Memory),
            "api" | "remote" | "remote_api" => Ok(ProviderKind::RemoteApi),
            "sql" => Ok(ProviderKind::Sql),
            "redis" => Ok(ProviderKind::Redis),
            _ => Err(AssemblyError::UnsupportedSelector {
                selector: s.to_string(),
                component: "provider selector",
            }),
        }
    }
}
