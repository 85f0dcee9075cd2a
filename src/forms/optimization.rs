use serde::Deserialize;

use crate::domain::types::{SchemaName, TableName};
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
/// Form data for gathering optimizer statistics on one table.
pub struct GatherStatsForm {
    pub schema_name: String,
    pub table_name: String,
}

impl GatherStatsForm {
    pub fn into_names(self) -> Result<(SchemaName, TableName), FormError> {
        Ok((
            SchemaName::new(&self.schema_name)?,
            TableName::new(&self.table_name)?,
        ))
    }
}

#[derive(Debug, Deserialize)]
/// Form data for scheduling statistics gathering on a schema.
pub struct ScheduleStatsForm {
    pub schema_name: String,
}

impl TryFrom<ScheduleStatsForm> for SchemaName {
    type Error = FormError;

    fn try_from(form: ScheduleStatsForm) -> Result<Self, Self::Error> {
        Ok(SchemaName::new(&form.schema_name)?)
    }
}
