//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty Oracle identifiers,
//! valid backup levels, ordered date ranges) so that once a value reaches the
//! backend client it can be sent as-is.
use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Longest identifier accepted by Oracle 12.2 and later.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided identifier exceeds the Oracle length limit.
    #[error("identifier is longer than 128 characters")]
    TooLong,
    /// Provided identifier contains characters Oracle does not accept unquoted.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Checks an unquoted Oracle identifier, optionally `OWNER.NAME` qualified.
fn normalize_identifier(value: &str, qualified: bool) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Err(TypeConstraintError::TooLong);
    }

    let valid_part = |part: &str| {
        let mut chars = part.chars();
        chars.next().is_some_and(char::is_alphabetic)
            && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '#'))
    };

    let parts: Vec<&str> = trimmed.split('.').collect();
    let valid = match parts.as_slice() {
        [name] => valid_part(name),
        [owner, name] if qualified => valid_part(owner) && valid_part(name),
        _ => false,
    };

    if valid {
        Ok(trimmed.to_string())
    } else {
        Err(TypeConstraintError::InvalidIdentifier(trimmed.to_string()))
    }
}

/// Macro to generate newtypes wrapping validated Oracle identifiers.
macro_rules! identifier_newtype {
    ($name:ident, $qualified:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates and trims the identifier.
            pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
                normalize_identifier(value.as_ref(), $qualified).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

identifier_newtype!(Username, false, "Oracle database account name.");
identifier_newtype!(RoleName, false, "Oracle role name.");
identifier_newtype!(SchemaName, false, "Schema owning database objects.");
identifier_newtype!(ColumnName, false, "Table column name.");
identifier_newtype!(PolicyName, false, "Virtual Private Database policy name.");
identifier_newtype!(
    TableName,
    true,
    "Table name, optionally qualified with its owner."
);
identifier_newtype!(
    ObjectName,
    true,
    "Name of a database object privileges can be granted on."
);

/// System or object privilege name such as `CREATE SESSION`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PrivilegeName(String);

impl PrivilegeName {
    /// Collapses inner whitespace and upper-cases the name.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = value
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        if normalized.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if normalized.chars().count() > MAX_IDENTIFIER_LENGTH {
            return Err(TypeConstraintError::TooLong);
        }
        if !normalized
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '$' | '#'))
        {
            return Err(TypeConstraintError::InvalidIdentifier(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PrivilegeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PrivilegeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrivilegeName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrivilegeName> for String {
    fn from(value: PrivilegeName) -> Self {
        value.0
    }
}

/// RMAN incremental backup level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackupLevel {
    /// Baseline copy of every used block.
    Level0,
    /// Blocks changed since the last level 0 or 1 backup.
    Level1,
}

impl BackupLevel {
    pub const fn get(self) -> u8 {
        match self {
            BackupLevel::Level0 => 0,
            BackupLevel::Level1 => 1,
        }
    }
}

impl TryFrom<u8> for BackupLevel {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BackupLevel::Level0),
            1 => Ok(BackupLevel::Level1),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "backup level must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl Display for BackupLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Inclusive reporting window with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TypeConstraintError> {
        if start > end {
            return Err(TypeConstraintError::InvalidValue(
                "range start is after its end".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Whole days from the start of `from` to the end of `to`.
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Result<Self, TypeConstraintError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self::new(from.and_time(NaiveTime::MIN), to.and_time(end_of_day))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Timestamp sent by the management API.
///
/// The backend serializes Java `LocalDateTime` values either as ISO-8601
/// strings or as `[year, month, day, hour, minute, second?, nanos?]` arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BackendTimestamp(NaiveDateTime);

impl BackendTimestamp {
    pub const fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub const fn get(self) -> NaiveDateTime {
        self.0
    }

    fn parse_str(value: &str) -> Option<NaiveDateTime> {
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
            return Some(parsed.naive_utc());
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(parsed);
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
            return Some(parsed);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    fn from_parts(parts: &[i64]) -> Option<NaiveDateTime> {
        let part = |index: usize| parts.get(index).copied().unwrap_or(0);
        let [year, month, day] = [part(0), part(1), part(2)];
        let date = NaiveDate::from_ymd_opt(
            i32::try_from(year).ok()?,
            u32::try_from(month).ok()?,
            u32::try_from(day).ok()?,
        )?;
        let time = NaiveTime::from_hms_nano_opt(
            u32::try_from(part(3)).ok()?,
            u32::try_from(part(4)).ok()?,
            u32::try_from(part(5)).ok()?,
            u32::try_from(part(6)).ok()?,
        )?;
        Some(date.and_time(time))
    }
}

impl Display for BackendTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl Serialize for BackendTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BackendTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Parts(Vec<i64>),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self::parse_str(&text),
            Raw::Parts(parts) if parts.len() >= 3 => Self::from_parts(&parts),
            Raw::Parts(_) => None,
        };

        parsed
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("unrecognized timestamp"))
    }
}

/// Name of a related entity as returned inside another entity.
///
/// The backend sends either bare strings or `{ "name": ... }` objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamedRef(String);

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NamedRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for NamedRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Object { name: String },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(name) | Raw::Object { name } => Self(name),
        })
    }
}
