//! Permission flags supplied by the auth/session provider
//!
//! Consulted by the surrounding authorization layer; the record store and
//! the analysis engine never read these.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_view_all_jobs: bool,
    pub can_edit_all_jobs: bool,
    pub can_assign_jobs: bool,
}

impl Permissions {
    /// Full access, the shape an admin session reports
    pub fn admin() -> Self {
        Self {
            can_view_all_jobs: true,
            can_edit_all_jobs: true,
            can_assign_jobs: true,
        }
    }

    /// Read-only access
    pub fn read_only() -> Self {
        Self {
            can_view_all_jobs: true,
            can_edit_all_jobs: false,
            can_assign_jobs: false,
        }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_only()
    }
}
