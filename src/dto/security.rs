use crate::domain::security::{AuditConfig, TdeConfig, VpdPolicy};
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct TdePageData {
    pub configurations: Paginated<TdeConfig>,
}

#[derive(Debug)]
pub struct VpdPageData {
    pub policies: Paginated<VpdPolicy>,
}

#[derive(Debug)]
pub struct AuditPageData {
    pub configurations: Paginated<AuditConfig>,
}
