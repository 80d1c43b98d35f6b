use anyhow::{anyhow, Result};
use kpi_engine::{KpiSnapshot, SalesRecord, UserProfile};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::error;

use crate::envelope::{Envelope, ErrorBody, LoginResponse};

/// Everything the dashboard view needs before it renders.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub kpis: KpiSnapshot,
    pub sales: Vec<SalesRecord>,
}

#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: Client,
    api: String,
}

/// Turns a non-2xx response into an error carrying the server's message and code.
async fn check(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => Err(anyhow!("{} ({}, {})", body.message, body.code, status)),
        Err(_) => Err(anyhow!("request failed with {}", status)),
    }
}

impl DashboardClient {
    pub fn new(api: impl Into<String>) -> Self {
        Self { http: Client::new(), api: api.into().trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.api, path)
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = check(self.http.get(self.url(path)).send().await?).await?;
        Ok(resp.json::<Envelope<T>>().await?.data)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;
        Ok(check(resp).await?.json::<LoginResponse>().await?.user)
    }

    pub async fn kpis(&self) -> Result<KpiSnapshot> {
        self.get_envelope("/kpis").await
    }

    pub async fn sales(&self) -> Result<Vec<SalesRecord>> {
        self.get_envelope("/sales").await
    }

    /// Fetches KPIs and sales concurrently; both must succeed. Failures are
    /// logged here and the caller shows nothing.
    pub async fn load_dashboard(&self) -> Option<DashboardData> {
        let (kpis, sales) = tokio::join!(self.kpis(), self.sales());
        match (kpis, sales) {
            (Ok(kpis), Ok(sales)) => Some(DashboardData { kpis, sales }),
            (Err(e), _) | (_, Err(e)) => {
                error!(target = "dashboard", "Failed to fetch data: {e:#}");
                None
            }
        }
    }
}
