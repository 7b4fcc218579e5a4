use ratewatch::RatewatchError;
use ratewatch::client::RatesClient;
use ratewatch::config::fetch_config;
use ratewatch::dashboard::Dashboard;
use ratewatch::registry::SeriesRegistry;

#[tokio::main]
async fn main() -> Result<(), RatewatchError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let app_config = fetch_config()?;

    let client = RatesClient::new(&app_config.proxy, SeriesRegistry::benchmark())?;
    let mut dashboard = Dashboard::new(client, app_config.history_days);

    dashboard.run(app_config.refresh_interval).await;

    Ok(())
}
