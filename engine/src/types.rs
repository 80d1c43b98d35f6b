use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role { Admin, User }

/// Static account entry. The password is compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// What a successful login hands back to the caller; never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserProfile {
    fn from(u: &User) -> Self {
        Self { id: u.id, username: u.username.to_string(), role: u.role }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_sales: u64,
    pub active_customers: u64,
    pub daily_revenue: u64,
    pub liquidity_ratio: f64,
    pub total_volume: u64,
    pub active_positions: u64,
}

/// Percent change per metric. Static, not derived from history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiTrends {
    pub total_sales: f64,
    pub active_customers: f64,
    pub daily_revenue: f64,
    pub liquidity_ratio: f64,
    pub total_volume: f64,
    pub active_positions: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    #[serde(flatten)]
    pub metrics: Kpis,
    pub trends: KpiTrends,
    pub last_updated: String, // stamped per request
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sales: u64,
    pub volume: u64,
    pub transactions: u64,
    pub avg_order_value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind { PositionOpened, LiquidityUpdate, CustomerRegistered, TradeExecuted }

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus { Success, Info }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub timestamp: String,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Aggregates over the sales series, computed at request time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: u64,
    pub total_volume: u64,
    pub total_transactions: u64,
    pub average_order_value: f64,
    pub period: Option<Period>,
    pub data_points: usize,
}
