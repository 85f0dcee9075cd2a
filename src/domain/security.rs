//! Transparent Data Encryption, Virtual Private Database and auditing
//! configuration records.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{BackendTimestamp, ColumnName, PolicyName, TableName};
use crate::pagination::Searchable;

/// Column encryption algorithms supported by TDE.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "AES128")]
    Aes128,
    #[serde(rename = "AES192")]
    Aes192,
    #[default]
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "3DES168")]
    TripleDes168,
}

impl EncryptionAlgorithm {
    pub const ALL: [EncryptionAlgorithm; 4] = [
        EncryptionAlgorithm::Aes128,
        EncryptionAlgorithm::Aes192,
        EncryptionAlgorithm::Aes256,
        EncryptionAlgorithm::TripleDes168,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EncryptionAlgorithm::Aes128 => "AES128",
            EncryptionAlgorithm::Aes192 => "AES192",
            EncryptionAlgorithm::Aes256 => "AES256",
            EncryptionAlgorithm::TripleDes168 => "3DES168",
        }
    }
}

impl Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TdeConfig {
    pub id: i64,
    pub table_name: String,
    pub column_name: String,
    pub encryption_algorithm: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<BackendTimestamp>,
}

/// Column to encrypt or decrypt.
#[derive(Clone, Debug, PartialEq)]
pub struct TdeColumn {
    pub table_name: TableName,
    pub column_name: ColumnName,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct VpdPolicy {
    #[serde(default)]
    pub id: Option<i64>,
    pub policy_name: String,
    pub table_name: String,
    pub function_name: String,
    #[serde(default)]
    pub policy_function: Option<String>,
    #[serde(default)]
    pub statement_types: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<BackendTimestamp>,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVpdPolicy {
    pub policy_name: PolicyName,
    pub table_name: TableName,
    pub function_name: String,
    pub policy_function: String,
    pub statement_types: String,
    pub active: bool,
}

/// Statements an audit configuration records.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLevel {
    #[default]
    All,
    Insert,
    Update,
    Delete,
}

impl AuditLevel {
    pub const ALL: [AuditLevel; 4] = [
        AuditLevel::All,
        AuditLevel::Insert,
        AuditLevel::Update,
        AuditLevel::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AuditLevel::All => "ALL",
            AuditLevel::Insert => "INSERT",
            AuditLevel::Update => "UPDATE",
            AuditLevel::Delete => "DELETE",
        }
    }
}

impl Display for AuditLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AuditConfig {
    pub id: i64,
    pub table_name: String,
    pub audit_level: AuditLevel,
    pub audit_successful: bool,
    pub audit_failed: bool,
    #[serde(default)]
    pub created_at: Option<BackendTimestamp>,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAuditConfig {
    pub table_name: TableName,
    pub audit_level: AuditLevel,
    pub audit_successful: bool,
    pub audit_failed: bool,
}

impl Searchable for TdeConfig {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.table_name.clone(),
            self.column_name.clone(),
            self.encryption_algorithm.clone(),
        ]
    }
}

impl Searchable for VpdPolicy {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.policy_name.clone(),
            self.table_name.clone(),
            self.function_name.clone(),
            self.statement_types.clone(),
        ]
    }
}

impl Searchable for AuditConfig {
    fn search_values(&self) -> Vec<String> {
        vec![self.table_name.clone(), self.audit_level.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_match_backend() {
        let parsed: EncryptionAlgorithm = serde_json::from_str("\"3DES168\"").unwrap();
        assert_eq!(parsed, EncryptionAlgorithm::TripleDes168);
        assert_eq!(EncryptionAlgorithm::default().as_str(), "AES256");
    }

    #[test]
    fn new_audit_config_payload() {
        let config = NewAuditConfig {
            table_name: TableName::new("HR.EMPLOYEES").unwrap(),
            audit_level: AuditLevel::Update,
            audit_successful: true,
            audit_failed: false,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["tableName"], "HR.EMPLOYEES");
        assert_eq!(json["auditLevel"], "UPDATE");
        assert_eq!(json["auditFailed"], false);
    }
}
