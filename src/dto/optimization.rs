use crate::domain::optimization::SlowQuery;
use crate::pagination::Paginated;

#[derive(Debug)]
pub struct OptimizationPageData {
    pub slow_queries: Paginated<SlowQuery>,
}

#[derive(Debug)]
pub struct TuningPageData {
    pub query_id: i64,
    pub recommendation: String,
}
