use anyhow::Result;
use clap::Parser;
use dashboard_api::{client::DashboardClient, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dashboard-client", about = "Log in to the dashboard API and print KPI cards and the sales series")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    api: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = DashboardClient::new(args.api);
    let user = client
        .login(&args.username, &args.password)
        .await
        .map_err(|e| e.context("Invalid credentials"))?;

    if let Some(data) = client.load_dashboard().await {
        print!("{}", render::dashboard(&user, &data.kpis, &data.sales)?);
    }
    Ok(())
}
