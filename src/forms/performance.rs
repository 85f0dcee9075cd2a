//! Query parameters of the performance page.

use serde::Deserialize;

use crate::domain::types::DateRange;
use crate::forms::{FormError, parse_optional_date};

#[derive(Debug, Default, Deserialize)]
/// AWR reporting window and ASH list state taken from the query string.
pub struct PerformanceQuery {
    /// First day of the AWR window, `YYYY-MM-DD`.
    #[serde(default)]
    pub start: String,
    /// Last day of the AWR window, inclusive.
    #[serde(default)]
    pub end: String,
    pub search: Option<String>,
    pub page: Option<usize>,
}

impl PerformanceQuery {
    /// Returns `None` until both ends of the window are chosen.
    pub fn awr_range(&self) -> Result<Option<DateRange>, FormError> {
        let start = parse_optional_date(&self.start)?;
        let end = parse_optional_date(&self.end)?;

        match (start, end) {
            (Some(start), Some(end)) => DateRange::from_dates(start, end)
                .map(Some)
                .map_err(|_| FormError::Invalid("The start date must not be after the end date".to_string())),
            (None, None) => Ok(None),
            _ => Err(FormError::Invalid(
                "Choose both a start and an end date".to_string(),
            )),
        }
    }

    /// Query-string suffix (`&start=..&end=..`) that keeps the AWR window
    /// when the ASH table is paged.
    pub fn window_query(&self) -> String {
        let pairs: Vec<(&str, &str)> = [("start", self.start.trim()), ("end", self.end.trim())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();
        if pairs.is_empty() {
            return String::new();
        }
        serde_html_form::to_string(&pairs)
            .map(|query| format!("&{query}"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(start: &str, end: &str) -> PerformanceQuery {
        PerformanceQuery {
            start: start.to_string(),
            end: end.to_string(),
            ..PerformanceQuery::default()
        }
    }

    #[test]
    fn empty_window_is_not_an_error() {
        assert_eq!(query("", "").awr_range().unwrap(), None);
    }

    #[test]
    fn window_covers_whole_end_day() {
        let range = query("2024-12-30", "2024-12-31").awr_range().unwrap().unwrap();
        assert_eq!(range.start().to_string(), "2024-12-30 00:00:00");
        assert_eq!(range.end().to_string(), "2024-12-31 23:59:59");
    }

    #[test]
    fn rejects_reversed_or_partial_window() {
        assert!(query("2024-12-31", "2024-12-30").awr_range().is_err());
        assert!(query("2024-12-31", "").awr_range().is_err());
        assert!(query("yesterday", "2024-12-30").awr_range().is_err());
    }

    #[test]
    fn window_query_carries_chosen_dates() {
        assert_eq!(query("", "").window_query(), "");
        assert_eq!(
            query("2024-01-01", "2024-01-31").window_query(),
            "&start=2024-01-01&end=2024-01-31"
        );
        assert_eq!(query("2024-01-01", " ").window_query(), "&start=2024-01-01");
    }
}
