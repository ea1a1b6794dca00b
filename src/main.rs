use sonarqube_tracker::{SonarConfig, SonarQubeClient};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SonarConfig::from_env()?;
    let client = SonarQubeClient::from_config(&config)?;

    info!(
        project_key = %config.project_key,
        base_url = %config.base_url,
        "Collecting SonarQube data"
    );

    let issues = client
        .get_issues(&config.project_key, config.branch.as_deref())
        .await?;
    let metrics = client.get_metrics(&config.project_key).await?;

    info!(issues = issues.len(), metrics = metrics.len(), "Data collected");

    let report = serde_json::json!({
        "project": config.project_key,
        "branch": config.branch,
        "issues": issues,
        "metrics": metrics,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
