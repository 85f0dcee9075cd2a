use serde::Serialize;

/// Headline figure shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStat {
    pub name: &'static str,
    pub href: &'static str,
    /// `None` when the backend could not be reached.
    pub value: Option<usize>,
}

#[derive(Debug)]
pub struct DashboardPageData {
    pub stats: Vec<DashboardStat>,
}
