//! Forms for TDE, VPD and audit configuration.

use serde::Deserialize;

use crate::domain::security::{
    AuditLevel, EncryptionAlgorithm, NewAuditConfig, NewVpdPolicy, TdeColumn,
};
use crate::domain::types::{ColumnName, PolicyName, TableName};
use crate::forms::FormError;

pub const DEFAULT_STATEMENT_TYPES: &str = "SELECT,INSERT,UPDATE,DELETE";
const STATEMENT_TYPES: [&str; 5] = ["SELECT", "INSERT", "UPDATE", "DELETE", "INDEX"];

#[derive(Debug, Deserialize)]
/// Column to encrypt and the algorithm to use.
pub struct EnableTdeForm {
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub algorithm: EncryptionAlgorithm,
}

impl EnableTdeForm {
    pub fn into_parts(self) -> Result<(TdeColumn, EncryptionAlgorithm), FormError> {
        let column = TdeColumn {
            table_name: TableName::new(&self.table_name)?,
            column_name: ColumnName::new(&self.column_name)?,
        };
        Ok((column, self.algorithm))
    }
}

#[derive(Debug, Deserialize)]
pub struct DisableTdeForm {
    pub table_name: String,
    pub column_name: String,
}

impl TryFrom<DisableTdeForm> for TdeColumn {
    type Error = FormError;

    fn try_from(form: DisableTdeForm) -> Result<Self, Self::Error> {
        Ok(TdeColumn {
            table_name: TableName::new(&form.table_name)?,
            column_name: ColumnName::new(&form.column_name)?,
        })
    }
}

/// Upper-cases and validates a comma separated statement type list.
fn normalize_statement_types(raw: &str) -> Result<String, FormError> {
    let mut types: Vec<String> = Vec::new();
    for statement in raw.split(',') {
        let statement = statement.trim().to_uppercase();
        if statement.is_empty() {
            continue;
        }
        if !STATEMENT_TYPES.contains(&statement.as_str()) {
            return Err(FormError::Invalid(format!(
                "unsupported statement type: {statement}"
            )));
        }
        if !types.contains(&statement) {
            types.push(statement);
        }
    }

    if types.is_empty() {
        Ok(DEFAULT_STATEMENT_TYPES.to_string())
    } else {
        Ok(types.join(","))
    }
}

#[derive(Debug, Deserialize)]
/// Form data for a new Virtual Private Database policy.
pub struct CreateVpdPolicyForm {
    pub policy_name: String,
    pub table_name: String,
    pub function_name: String,
    /// PL/SQL body of the policy function, passed through verbatim.
    #[serde(default)]
    pub policy_function: String,
    #[serde(default)]
    pub statement_types: String,
    #[serde(default)]
    pub active: bool,
}

impl TryFrom<CreateVpdPolicyForm> for NewVpdPolicy {
    type Error = FormError;

    fn try_from(form: CreateVpdPolicyForm) -> Result<Self, Self::Error> {
        let function_name = form.function_name.trim();
        if function_name.is_empty() {
            return Err(FormError::Invalid("Function name is required".to_string()));
        }

        Ok(NewVpdPolicy {
            policy_name: PolicyName::new(&form.policy_name)?,
            table_name: TableName::new(&form.table_name)?,
            function_name: function_name.to_string(),
            policy_function: form.policy_function.trim().to_string(),
            statement_types: normalize_statement_types(&form.statement_types)?,
            active: form.active,
        })
    }
}

#[derive(Debug, Deserialize)]
/// Form data for enabling auditing on a table.
pub struct EnableAuditForm {
    pub table_name: String,
    #[serde(default)]
    pub audit_level: AuditLevel,
    #[serde(default)]
    pub audit_successful: bool,
    #[serde(default)]
    pub audit_failed: bool,
}

impl TryFrom<EnableAuditForm> for NewAuditConfig {
    type Error = FormError;

    fn try_from(form: EnableAuditForm) -> Result<Self, Self::Error> {
        Ok(NewAuditConfig {
            table_name: TableName::new(&form.table_name)?,
            audit_level: form.audit_level,
            audit_successful: form.audit_successful,
            audit_failed: form.audit_failed,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DisableAuditForm {
    pub table_name: String,
}

impl TryFrom<DisableAuditForm> for TableName {
    type Error = FormError;

    fn try_from(form: DisableAuditForm) -> Result<Self, Self::Error> {
        Ok(TableName::new(&form.table_name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_types_default_and_normalize() {
        assert_eq!(normalize_statement_types("").unwrap(), DEFAULT_STATEMENT_TYPES);
        assert_eq!(
            normalize_statement_types(" select, update ,select").unwrap(),
            "SELECT,UPDATE"
        );
        assert!(normalize_statement_types("SELECT,DROP").is_err());
    }

    #[test]
    fn vpd_policy_requires_function_name() {
        let form = CreateVpdPolicyForm {
            policy_name: "EMP_POLICY".to_string(),
            table_name: "HR.EMPLOYEES".to_string(),
            function_name: " ".to_string(),
            policy_function: String::new(),
            statement_types: String::new(),
            active: true,
        };
        assert!(NewVpdPolicy::try_from(form).is_err());
    }

    #[test]
    fn vpd_policy_keeps_function_body() {
        let form = CreateVpdPolicyForm {
            policy_name: "EMP_POLICY".to_string(),
            table_name: "HR.EMPLOYEES".to_string(),
            function_name: "HR.EMP_FILTER".to_string(),
            policy_function: "RETURN 'salary < 5000';".to_string(),
            statement_types: "select".to_string(),
            active: false,
        };
        let policy = NewVpdPolicy::try_from(form).unwrap();
        assert_eq!(policy.policy_function, "RETURN 'salary < 5000';");
        assert_eq!(policy.statement_types, "SELECT");
        assert!(!policy.active);
    }

    #[test]
    fn tde_form_defaults_to_aes256() {
        let form: EnableTdeForm =
            serde_html_form::from_str("table_name=HR.EMPLOYEES&column_name=SALARY").unwrap();
        let (column, algorithm) = form.into_parts().unwrap();
        assert_eq!(column.column_name.as_str(), "SALARY");
        assert_eq!(algorithm, EncryptionAlgorithm::Aes256);
    }

    #[test]
    fn audit_form_parses_level() {
        let form: EnableAuditForm = serde_html_form::from_str(
            "table_name=HR.EMPLOYEES&audit_level=DELETE&audit_successful=true",
        )
        .unwrap();
        let config = NewAuditConfig::try_from(form).unwrap();
        assert_eq!(config.audit_level, AuditLevel::Delete);
        assert!(config.audit_successful);
        assert!(!config.audit_failed);
    }
}
