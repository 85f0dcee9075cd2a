//! Registry of management API URLs.
//!
//! Every operation the console performs maps to one method here. Path
//! segments are percent-encoded by [`Url::path_segments_mut`], so names such
//! as `CREATE SESSION` are safe to pass through.

use reqwest::Url;

use crate::backend::errors::{BackendError, BackendResult};
use crate::domain::types::BackupLevel;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> BackendResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| BackendError::InvalidRequest(format!("invalid API base url: {e}")))?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(BackendError::InvalidRequest(format!(
                "API base url must be an http(s) url: {base_url}"
            )));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn users(&self) -> Url {
        self.url(&["users"])
    }

    pub fn user(&self, username: &str) -> Url {
        self.url(&["users", username])
    }

    pub fn user_lock(&self, username: &str) -> Url {
        self.url(&["users", username, "lock"])
    }

    pub fn user_unlock(&self, username: &str) -> Url {
        self.url(&["users", username, "unlock"])
    }

    pub fn user_roles_bulk(&self, username: &str) -> Url {
        self.url(&["users", username, "roles", "bulk"])
    }

    pub fn user_role(&self, username: &str, role: &str) -> Url {
        self.url(&["users", username, "roles", role])
    }

    pub fn roles(&self) -> Url {
        self.url(&["roles"])
    }

    pub fn role(&self, name: &str) -> Url {
        self.url(&["roles", name])
    }

    pub fn role_privileges(&self, name: &str) -> Url {
        self.url(&["roles", name, "privileges"])
    }

    pub fn role_privilege(&self, name: &str, privilege: &str) -> Url {
        self.url(&["roles", name, "privileges", privilege])
    }

    pub fn privileges(&self) -> Url {
        self.url(&["privileges"])
    }

    pub fn privilege(&self, name: &str) -> Url {
        self.url(&["privileges", name])
    }

    pub fn grant_system_privilege(&self) -> Url {
        self.url(&["privileges", "grant", "system"])
    }

    pub fn grant_object_privilege(&self) -> Url {
        self.url(&["privileges", "grant", "object"])
    }

    pub fn rman_backups(&self) -> Url {
        self.url(&["rman", "backups"])
    }

    pub fn rman_full_backup(&self) -> Url {
        self.url(&["rman", "backup", "full"])
    }

    pub fn rman_incremental_backup(&self, level: BackupLevel) -> Url {
        self.url(&["rman", "incremental-backup", &level.to_string()])
    }

    pub fn rman_restore(&self) -> Url {
        self.url(&["rman", "restore"])
    }

    pub fn real_time_metrics(&self) -> Url {
        self.url(&["performance", "metrics"])
    }

    pub fn ash_report(&self) -> Url {
        self.url(&["performance", "ash"])
    }

    pub fn awr_report(&self) -> Url {
        self.url(&["performance", "awr"])
    }

    pub fn slow_queries(&self) -> Url {
        self.url(&["optimization", "slowQueries"])
    }

    pub fn tuning_recommendation(&self, query_id: i64) -> Url {
        self.url(&["optimization", "optimize-query", &query_id.to_string()])
    }

    pub fn gather_table_stats(&self) -> Url {
        self.url(&["optimization", "gather-stats"])
    }

    pub fn schedule_stats_gathering(&self) -> Url {
        self.url(&["optimization", "schedule-stats"])
    }

    pub fn ha_status(&self) -> Url {
        self.url(&["ha", "status"])
    }

    pub fn ha_configure(&self) -> Url {
        self.url(&["ha", "configure"])
    }

    pub fn ha_simulate(&self, operation: &str) -> Url {
        self.url(&["ha", "simulate", operation])
    }

    pub fn ha_report(&self) -> Url {
        self.url(&["ha", "report"])
    }

    pub fn tde_enable(&self) -> Url {
        self.url(&["security", "tde", "enable"])
    }

    pub fn tde_disable(&self) -> Url {
        self.url(&["security", "tde", "disable"])
    }

    pub fn tde_configurations(&self) -> Url {
        self.url(&["security", "tde", "configurations"])
    }

    pub fn vpd_policies(&self) -> Url {
        self.url(&["security", "vpd", "policies"])
    }

    pub fn vpd_policy(&self, policy_name: &str) -> Url {
        self.url(&["security", "vpd", "policies", policy_name])
    }

    pub fn audit_enable(&self) -> Url {
        self.url(&["security", "audit", "enable"])
    }

    pub fn audit_disable(&self) -> Url {
        self.url(&["security", "audit", "disable"])
    }

    pub fn audit_configurations(&self) -> Url {
        self.url(&["security", "audit", "configurations"])
    }
}
