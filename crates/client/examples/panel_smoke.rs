//! Example: Exercising every endpoint group against a live panel
//!
//! Creates, updates and removes a throwaway cron job, subscription and
//! environment variable, re-saves `config.sh` unchanged and reloads the
//! system. Run it only against a panel you are allowed to modify.
//!
//! # Setup
//!
//! 1. Create an application in the panel (System settings -> Applications)
//!    with every scope enabled.
//!
//! 2. Set up environment variables (or a `.env` / `qinglong.toml` file):
//!    ```bash
//!    export QL_URL=http://127.0.0.1:5700
//!    export QL_CLIENT_ID=...
//!    export QL_CLIENT_SECRET=...
//!    ```
//!
//! 3. Run this example:
//!    ```bash
//!    cargo run -p qinglong-client --example panel_smoke
//!    ```

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use qinglong_client::{
    config, EnvVarSpec, JobSpec, PullOption, QlClient, ScheduleType, SubscriptionKind,
    SubscriptionSpec,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const STATUS_IDLE: i64 = 1;
const POLL_ATTEMPTS: u32 = 30;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,qinglong_client=debug")),
        )
        .init();

    let config = config::load().context("Failed to load panel configuration")?;
    let client = QlClient::connect(config).context("Failed to log in")?;

    crons(&client)?;
    subscriptions(&client)?;
    configs(&client)?;
    envs(&client)?;

    let reloaded = client.system().reload()?;
    info!(%reloaded, "System reload requested");
    Ok(())
}

fn crons(client: &QlClient) -> anyhow::Result<()> {
    let crons = client.crons();
    crons.list()?;

    let spec = JobSpec::new("echo hello, world!", "30 0 * * *", "smoke").labels(["tag1"]);
    let created = crons.create(&spec)?;
    let id = created["id"].as_i64().context("created job has no id")?;

    let updated = crons.update(id, &spec.name("smoke2"))?;
    if updated["name"] != "smoke2" {
        bail!("job rename was not applied: {updated}");
    }

    crons.run(id)?;
    crons.add_labels(id, "smoke")?;
    crons.remove_labels(id, "smoke")?;

    // Wait for the run to finish before reading its log
    for _ in 0..POLL_ATTEMPTS {
        if crons.get(id)?["status"].as_i64() == Some(STATUS_IDLE) {
            break;
        }
        thread::sleep(Duration::from_secs(1));
    }

    crons.disable(id)?;
    crons.enable(id)?;

    client.logs().list()?;
    let logs = crons.logs(id)?;
    info!(%logs, "Job logs");
    if let (Some(directory), Some(filename)) =
        (logs[0]["directory"].as_str(), logs[0]["filename"].as_str())
    {
        let detail = client.logs().detail(directory, filename)?;
        info!(%detail, "Log detail");
    }
    info!(latest = %crons.latest_log(id)?, "Latest log");

    crons.stop(id)?;
    crons.delete(id)?;
    Ok(())
}

fn subscriptions(client: &QlClient) -> anyhow::Result<()> {
    let subscriptions = client.subscriptions();
    info!(all = %subscriptions.list()?, "Subscriptions");

    let spec = SubscriptionSpec::new(
        SubscriptionKind::PublicRepo,
        "https://github.com/whyour/qinglong.git",
        ScheduleType::Crontab,
        "smoke",
    )
    .schedule("* * * * 1")
    .branch("master")
    .name("smoke")
    .auto_add_cron(false)
    .auto_del_cron(false);

    let created = subscriptions.create(&spec)?;
    let id = created["id"].as_i64().context("created subscription has no id")?;

    let updated = subscriptions.update(id, &spec.name("smoke2"))?;
    if updated["name"] != "smoke2" {
        bail!("subscription rename was not applied: {updated}");
    }

    subscriptions.stop(id)?;
    subscriptions.enable(id)?;
    subscriptions.disable(id)?;
    info!(detail = %subscriptions.detail(id)?, log = %subscriptions.log(id)?, "Subscription");
    subscriptions.delete(id)?;

    // Credentials are only shown here; the smoke run never creates a private subscription
    let private = PullOption::UserPassword { username: "user".into(), password: "***".into() };
    info!(?private, "Private repositories take credentials");
    Ok(())
}

fn configs(client: &QlClient) -> anyhow::Result<()> {
    const CONFIG_NAME: &str = "config.sh";

    info!(files = %client.configs().files()?, "Config files");
    let content = client.configs().detail(CONFIG_NAME)?;
    let content = content.as_str().context("config content is not a string")?;
    client.configs().save(CONFIG_NAME, content)?;
    Ok(())
}

fn envs(client: &QlClient) -> anyhow::Result<()> {
    let envs = client.envs();
    info!(all = %envs.list()?, "Environment variables");

    let created = envs.add(&EnvVarSpec::new("SMOKE", "smoke"))?;
    let id = created["id"].as_i64().context("created variable has no id")?;
    info!(fetched = %envs.get_by_id(id)?, "Environment variable");

    envs.update(id, &EnvVarSpec::new("SMOKE2", "smoke2"))?;
    envs.disable(id)?;
    envs.enable(id)?;
    envs.delete(id)?;
    Ok(())
}
