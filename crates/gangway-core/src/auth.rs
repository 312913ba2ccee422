//! Sign-in configuration handed to the external authentication provider.
//! The core supplies only identity/display metadata and the automatic
//! sign-in flag; the flow itself is the provider's business.

use serde::{Deserialize, Serialize};

/// Display metadata for an authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInProvider {
    pub id: String,
    pub title: String,
    pub message: String,
}

/// Sign-in page configuration: which provider to offer and whether to
/// attempt automatic sign-in on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInConfig {
    pub provider: SignInProvider,
    #[serde(default)]
    pub auto: bool,
}
