//! Where the handlers get their data. The server ships with the literal
//! fixture tables; anything else only has to implement [`DataSource`].

use kpi_engine::{fixtures, ActivityRecord, Kpis, KpiTrends, SalesRecord, User};

pub trait DataSource: Send + Sync {
    fn kpis(&self) -> anyhow::Result<(Kpis, KpiTrends)>;
    fn sales(&self) -> anyhow::Result<Vec<SalesRecord>>;
    fn activity(&self) -> anyhow::Result<Vec<ActivityRecord>>;
    fn users(&self) -> anyhow::Result<&[User]>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl DataSource for FixtureSource {
    fn kpis(&self) -> anyhow::Result<(Kpis, KpiTrends)> {
        Ok((fixtures::KPIS, fixtures::KPI_TRENDS))
    }

    fn sales(&self) -> anyhow::Result<Vec<SalesRecord>> {
        Ok(fixtures::sales_series())
    }

    fn activity(&self) -> anyhow::Result<Vec<ActivityRecord>> {
        Ok(fixtures::activity_feed())
    }

    fn users(&self) -> anyhow::Result<&[User]> {
        Ok(fixtures::USERS.as_slice())
    }
}
