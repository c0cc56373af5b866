//! Deployment environments and their target databases

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Target environment for a deployment
///
/// The set is closed: every variant maps to exactly one database and no
/// other names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Development
    Dev,
    /// Quality assurance
    Qa,
    /// Production (gated behind an interactive confirmation)
    Prod,
}

impl Environment {
    /// All supported environments, in promotion order
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Qa, Environment::Prod];

    /// Lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Qa => "qa",
            Environment::Prod => "prod",
        }
    }

    /// Database identifier the placeholder is rewritten to
    pub fn database_name(&self) -> &'static str {
        match self {
            Environment::Dev => "SAAS_ANALYTICS_DEV",
            Environment::Qa => "SAAS_ANALYTICS_QA",
            Environment::Prod => "SAAS_ANALYTICS_PROD",
        }
    }

    /// Whether deployments to this environment require confirmation
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Prod)
    }

    /// Comma-separated list of valid names, for diagnostics
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Environment::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEnvironment {
                value: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
