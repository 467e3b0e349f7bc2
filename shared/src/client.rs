//! Auth DTOs shared by the HTTP client and its tests

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login response data
///
/// The backend answers the form-data login with an OAuth2-style token body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Staff user information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_admin() || self.permissions.iter().any(|p| p == permission)
    }
}
