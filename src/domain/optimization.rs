use serde::{Deserialize, Serialize};

use crate::pagination::Searchable;

/// Statement reported by the backend as slow.
///
/// `elapsed_time` is the cumulative elapsed time in microseconds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SlowQuery {
    pub id: i64,
    pub sql_id: String,
    #[serde(default)]
    pub sql_text: String,
    pub elapsed_time: f64,
    #[serde(default)]
    pub executions: u64,
    #[serde(default, skip_deserializing)]
    pub elapsed_time_secs: f64,
    #[serde(default, skip_deserializing)]
    pub avg_elapsed_secs: f64,
}

impl SlowQuery {
    /// Fills the per-second figures shown in the slow query table.
    #[must_use]
    pub fn with_derived_times(mut self) -> Self {
        self.elapsed_time_secs = self.elapsed_time / 1e6;
        self.avg_elapsed_secs = self.elapsed_time / self.executions.max(1) as f64 / 1e6;
        self
    }
}

impl Searchable for SlowQuery {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.sql_id.clone(),
            self.sql_text.clone(),
            self.elapsed_time.to_string(),
            self.executions.to_string(),
            self.elapsed_time_secs.to_string(),
            self.avg_elapsed_secs.to_string(),
        ]
    }
}
