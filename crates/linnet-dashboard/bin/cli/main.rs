use linnet_dashboard::{Dashboard, DashboardConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = DashboardConfig::from_env()?;
    let mut dashboard = Dashboard::start(&config)?;

    print!("{}", dashboard.render());
    dashboard.settled().await;
    print!("{}", dashboard.render());

    Ok(())
}
