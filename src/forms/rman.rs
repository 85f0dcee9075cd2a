use serde::Deserialize;

use crate::domain::types::BackupLevel;
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
/// Form data for triggering an incremental backup.
pub struct IncrementalBackupForm {
    pub level: u8,
}

impl TryFrom<IncrementalBackupForm> for BackupLevel {
    type Error = FormError;

    fn try_from(form: IncrementalBackupForm) -> Result<Self, Self::Error> {
        Ok(BackupLevel::try_from(form.level)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_levels_zero_and_one() {
        assert_eq!(
            BackupLevel::try_from(IncrementalBackupForm { level: 1 }).unwrap(),
            BackupLevel::Level1
        );
        assert!(BackupLevel::try_from(IncrementalBackupForm { level: 2 }).is_err());
    }
}
