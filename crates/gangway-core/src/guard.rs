//! Capability guards and the external permission seam.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Named reference to a capability evaluated by the external permission
/// engine, e.g. `catalog.entity.create`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityRef(String);

impl CapabilityRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CapabilityRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Outcome of a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// External permission/capability evaluator. May suspend while the ambient
/// identity is checked; the route layer only consumes the decision.
#[async_trait]
pub trait PermissionEvaluator: Send + Sync {
    async fn evaluate(&self, capability: &CapabilityRef) -> Decision;
}

/// Evaluator that allows everything. Used when no permission engine is
/// wired up.
pub struct AllowAll;

#[async_trait]
impl PermissionEvaluator for AllowAll {
    async fn evaluate(&self, _capability: &CapabilityRef) -> Decision {
        Decision::Allow
    }
}
