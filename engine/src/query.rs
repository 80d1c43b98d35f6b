use chrono::NaiveDate;
use thiserror::Error;

use crate::{AnalyticsSummary, Period, SalesRecord};

pub const MAX_LIMIT: usize = 100;
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Limit must be a number between 1 and 100")]
    InvalidLimit { raw: String },
}

impl QueryError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLimit { .. } => "INVALID_LIMIT",
        }
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw?.trim(), "%Y-%m-%d").ok()
}

/// Filter for the sales series. Unparseable parameters are dropped rather
/// than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl SalesQuery {
    pub fn from_params(start: Option<&str>, end: Option<&str>, limit: Option<&str>) -> Self {
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .map(|l| l.clamp(1, MAX_LIMIT as i64) as usize);
        Self { start: parse_date(start), end: parse_date(end), limit }
    }

    /// Inclusive date window, then the first `limit` survivors in series order.
    pub fn apply(&self, records: &[SalesRecord]) -> Vec<SalesRecord> {
        records
            .iter()
            .filter(|r| self.start.map_or(true, |s| r.date >= s))
            .filter(|r| self.end.map_or(true, |e| r.date <= e))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// Strict limit for the activity feed: absent means the default, anything
/// outside `1..=MAX_LIMIT` or non-numeric is an error.
pub fn activity_limit(raw: Option<&str>) -> Result<usize, QueryError> {
    let Some(raw) = raw else { return Ok(DEFAULT_ACTIVITY_LIMIT) };
    match raw.trim().parse::<i64>() {
        Ok(n) if (1..=MAX_LIMIT as i64).contains(&n) => Ok(n as usize),
        _ => Err(QueryError::InvalidLimit { raw: raw.to_string() }),
    }
}

pub fn summarize(records: &[SalesRecord]) -> AnalyticsSummary {
    let total_revenue: u64 = records.iter().map(|r| r.sales).sum();
    let total_volume: u64 = records.iter().map(|r| r.volume).sum();
    let total_transactions: u64 = records.iter().map(|r| r.transactions).sum();
    let average_order_value = if total_transactions == 0 {
        0.0
    } else {
        round2(total_revenue as f64 / total_transactions as f64)
    };
    let period = match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some(Period { start: first.date, end: last.date }),
        _ => None,
    };
    AnalyticsSummary {
        total_revenue,
        total_volume,
        total_transactions,
        average_order_value,
        period,
        data_points: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sales_series;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_date_window_inclusive() {
        let q = SalesQuery::from_params(Some("2025-01-03"), Some("2025-01-05"), None);
        let out = q.apply(&sales_series());
        let dates: Vec<NaiveDate> = out.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(3), day(4), day(5)]);
    }

    #[test]
    fn test_limit_takes_prefix() {
        let out = SalesQuery::from_params(None, None, Some("2")).apply(&sales_series());
        assert_eq!(out, sales_series()[..2].to_vec());
    }

    #[test]
    fn test_limit_clamped_and_garbage_ignored() {
        assert_eq!(SalesQuery::from_params(None, None, Some("0")).limit, Some(1));
        assert_eq!(SalesQuery::from_params(None, None, Some("5000")).limit, Some(MAX_LIMIT));
        assert_eq!(SalesQuery::from_params(None, None, Some("abc")).limit, None);
        assert_eq!(SalesQuery::from_params(None, None, Some("abc")).apply(&sales_series()).len(), 7);
    }

    #[test]
    fn test_bad_dates_ignored() {
        let q = SalesQuery::from_params(Some("yesterday"), Some("2025-13-40"), None);
        assert_eq!(q, SalesQuery::default());
    }

    #[test]
    fn test_window_then_limit() {
        let out = SalesQuery::from_params(Some("2025-01-04"), None, Some("2")).apply(&sales_series());
        assert_eq!(out.iter().map(|r| r.date).collect::<Vec<_>>(), vec![day(4), day(5)]);
    }

    #[test]
    fn test_activity_limit_bounds() {
        assert_eq!(activity_limit(None), Ok(DEFAULT_ACTIVITY_LIMIT));
        assert_eq!(activity_limit(Some("1")), Ok(1));
        assert_eq!(activity_limit(Some("100")), Ok(100));
        for bad in ["0", "101", "-3", "ten", ""] {
            assert_eq!(activity_limit(Some(bad)).unwrap_err().code(), "INVALID_LIMIT", "{bad}");
        }
    }

    #[test]
    fn test_limit_must_be_whole_integer() {
        // no prefix parsing: "2.5" and "3x" are not numbers here
        assert_eq!(SalesQuery::from_params(None, None, Some("2.5")).limit, None);
        assert_eq!(SalesQuery::from_params(None, None, Some("3x")).limit, None);
        assert!(activity_limit(Some("2.5")).is_err());
        assert!(activity_limit(Some("3x")).is_err());
    }

    #[test]
    fn test_empty_activity_limit_is_rejected_not_defaulted() {
        assert_eq!(activity_limit(Some("")), Err(QueryError::InvalidLimit { raw: String::new() }));
        assert_eq!(SalesQuery::from_params(None, None, Some("")).limit, None);
    }

    #[test]
    fn test_summary_over_fixture() {
        let s = summarize(&sales_series());
        assert_eq!(s.total_revenue, 30_900);
        assert_eq!(s.total_transactions, 927);
        assert_eq!(s.total_volume, 388_000);
        assert_eq!(s.average_order_value, 33.33);
        assert_eq!(s.data_points, 7);
        assert_eq!(s.period, Some(Period { start: day(1), end: day(7) }));
    }

    #[test]
    fn test_summary_empty() {
        let s = summarize(&[]);
        assert_eq!((s.total_revenue, s.average_order_value, s.period), (0, 0.0, None));
    }
}
