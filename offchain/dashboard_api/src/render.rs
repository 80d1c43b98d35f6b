//! Plain-text rendering for the terminal client.

use std::fmt::{self, Write};

use kpi_engine::{KpiSnapshot, SalesRecord, UserProfile};

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn trend(pct: f64) -> String {
    format!("{}{pct:.1}%", if pct >= 0.0 { "+" } else { "" })
}

pub fn kpi_cards(k: &KpiSnapshot) -> Vec<(&'static str, String, String)> {
    let (m, t) = (&k.metrics, &k.trends);
    vec![
        ("Total Sales", format!("${}", group_thousands(m.total_sales)), trend(t.total_sales)),
        ("Active Customers", group_thousands(m.active_customers), trend(t.active_customers)),
        ("Daily Revenue", format!("${}", group_thousands(m.daily_revenue)), trend(t.daily_revenue)),
        ("Liquidity Ratio", format!("{}", m.liquidity_ratio), trend(t.liquidity_ratio)),
        ("Total Volume", format!("${:.1}M", m.total_volume as f64 / 1_000_000.0), trend(t.total_volume)),
        ("Active Positions", group_thousands(m.active_positions), trend(t.active_positions)),
    ]
}

pub fn dashboard(user: &UserProfile, kpis: &KpiSnapshot, sales: &[SalesRecord]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Liquidity Dashboard")?;
    writeln!(out, "Welcome back, {}", user.username)?;
    writeln!(out)?;
    for (title, value, change) in kpi_cards(kpis) {
        writeln!(out, "{title:<18}{value:>14}  {change}")?;
    }
    writeln!(out)?;
    writeln!(out, "{:<12}{:>8}{:>10}{:>8}{:>8}", "date", "sales", "volume", "txns", "aov")?;
    for r in sales {
        writeln!(
            out,
            "{:<12}{:>8}{:>10}{:>8}{:>8.2}",
            r.date.to_string(), r.sales, r.volume, r.transactions, r.avg_order_value
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpi_engine::fixtures::{sales_series, KPIS, KPI_TRENDS};
    use kpi_engine::Role;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(850), "850");
        assert_eq!(group_thousands(1_200), "1,200");
        assert_eq!(group_thousands(2_500_000), "2,500,000");
    }

    #[test]
    fn test_cards() {
        let snap = KpiSnapshot { metrics: KPIS, trends: KPI_TRENDS, last_updated: String::new() };
        let cards = kpi_cards(&snap);
        assert_eq!(cards[0], ("Total Sales", "$150,000".to_string(), "+12.5%".to_string()));
        assert_eq!(cards[4].1, "$2.5M");
    }

    #[test]
    fn test_dashboard_lists_every_day() {
        let snap = KpiSnapshot { metrics: KPIS, trends: KPI_TRENDS, last_updated: String::new() };
        let user = UserProfile { id: 2, username: "user".into(), role: Role::User };
        let text = dashboard(&user, &snap, &sales_series()).unwrap();
        assert!(text.contains("Welcome back, user"));
        assert_eq!(text.matches("2025-01-0").count(), 7);
    }
}
