//! Literal datasets served by the dashboard. Nothing here changes at runtime.

use chrono::NaiveDate;

use crate::{ActivityKind, ActivityRecord, ActivityStatus, KpiTrends, Kpis, Role, SalesRecord, User};

pub static USERS: [User; 2] = [
    User { id: 1, username: "admin", password: "admin123", role: Role::Admin },
    User { id: 2, username: "user", password: "user123", role: Role::User },
];

pub const KPIS: Kpis = Kpis {
    total_sales: 150_000,
    active_customers: 1_200,
    daily_revenue: 5_000,
    liquidity_ratio: 2.4,
    total_volume: 2_500_000,
    active_positions: 850,
};

pub const KPI_TRENDS: KpiTrends = KpiTrends {
    total_sales: 12.5,
    active_customers: 8.2,
    daily_revenue: 5.7,
    liquidity_ratio: 2.1,
    total_volume: 15.3,
    active_positions: 6.8,
};

// (day of January 2025, sales, volume, transactions)
const SALES_ROWS: [(u32, u64, u64, u64); 7] = [
    (1, 4_000, 45_000, 120),
    (2, 4_200, 48_000, 126),
    (3, 4_100, 52_000, 123),
    (4, 4_500, 58_000, 135),
    (5, 4_300, 55_000, 129),
    (6, 4_700, 62_000, 141),
    (7, 5_100, 68_000, 153),
];

/// Seven daily records, ascending by date.
pub fn sales_series() -> Vec<SalesRecord> {
    SALES_ROWS
        .iter()
        .filter_map(|&(day, sales, volume, transactions)| {
            let date = NaiveDate::from_ymd_opt(2025, 1, day)?;
            Some(SalesRecord {
                date,
                sales,
                volume,
                transactions,
                avg_order_value: crate::query::round2(sales as f64 / transactions as f64),
            })
        })
        .collect()
}

/// Recent activity, newest first.
pub fn activity_feed() -> Vec<ActivityRecord> {
    let row = |id, kind, description: &str, amount, timestamp: &str, status| ActivityRecord {
        id,
        kind,
        description: description.to_string(),
        amount,
        timestamp: timestamp.to_string(),
        status,
    };
    vec![
        row(1, ActivityKind::PositionOpened, "New long position opened on BTC-PERP", Some(25_000.0), "2025-01-07T14:32:00Z", ActivityStatus::Success),
        row(2, ActivityKind::LiquidityUpdate, "Liquidity pool rebalanced", Some(150_000.0), "2025-01-07T13:15:00Z", ActivityStatus::Info),
        row(3, ActivityKind::CustomerRegistered, "New institutional customer onboarded", None, "2025-01-07T11:48:00Z", ActivityStatus::Success),
        row(4, ActivityKind::TradeExecuted, "Block trade executed on ETH-PERP", Some(8_750.5), "2025-01-07T10:05:00Z", ActivityStatus::Success),
        row(5, ActivityKind::LiquidityUpdate, "Reserve threshold adjusted", Some(50_000.0), "2025-01-06T22:40:00Z", ActivityStatus::Info),
    ]
}
