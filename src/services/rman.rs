//! Services triggering RMAN jobs and listing their history.

use crate::backend::{BackupReader, BackupWriter};
use crate::domain::types::BackupLevel;
use crate::dto::ListQuery;
use crate::dto::rman::RmanPageData;
use crate::forms::rman::IncrementalBackupForm;
use crate::services::ServiceResult;

pub async fn list_backups<B>(backend: &B, query: &ListQuery) -> ServiceResult<RmanPageData>
where
    B: BackupReader + ?Sized,
{
    let mut backups = backend.list_backups().await.map_err(|err| {
        log::error!("Failed to list backups: {err}");
        err
    })?;
    // newest first
    backups.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

    Ok(RmanPageData {
        backups: query.paginate(backups),
    })
}

pub async fn full_backup<B>(backend: &B) -> ServiceResult<()>
where
    B: BackupWriter + ?Sized,
{
    backend.full_backup().await.map_err(|err| {
        log::error!("Failed to start full backup: {err}");
        err
    })?;

    log::info!("Full backup started");
    Ok(())
}

pub async fn incremental_backup<B>(backend: &B, form: IncrementalBackupForm) -> ServiceResult<BackupLevel>
where
    B: BackupWriter + ?Sized,
{
    let level = BackupLevel::try_from(form)?;

    backend.incremental_backup(level).await.map_err(|err| {
        log::error!("Failed to start level {level} backup: {err}");
        err
    })?;

    log::info!("Level {level} incremental backup started");
    Ok(level)
}

pub async fn restore<B>(backend: &B) -> ServiceResult<()>
where
    B: BackupWriter + ?Sized,
{
    backend.restore().await.map_err(|err| {
        log::error!("Failed to start restore: {err}");
        err
    })?;

    log::info!("Restore started");
    Ok(())
}
