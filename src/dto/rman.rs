use crate::domain::backup::BackupHistory;
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct RmanPageData {
    pub backups: Paginated<BackupHistory>,
}
