use serde::{Deserialize, Serialize};

use crate::domain::types::BackendTimestamp;
use crate::pagination::Searchable;

/// One RMAN job recorded by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BackupHistory {
    pub id: i64,
    #[serde(rename(deserialize = "type"))]
    pub backup_type: String,
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<BackendTimestamp>,
    #[serde(default)]
    pub details: Option<String>,
}

impl BackupHistory {
    pub fn succeeded(&self) -> bool {
        matches!(
            self.status.to_ascii_uppercase().as_str(),
            "COMPLETED" | "SUCCESS"
        )
    }
}

impl Searchable for BackupHistory {
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![
            self.id.to_string(),
            self.backup_type.clone(),
            self.status.clone(),
        ];
        values.extend(self.timestamp.map(|t| t.to_string()));
        values.extend(self.details.clone());
        values
    }
}
