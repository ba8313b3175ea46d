//! Users Smoke
//!
//! Runs the create → get → list → update → delete scenario against a running
//! users API and exits non-zero on the first deviation.

use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{ClientConfig, ClientError, UserClient, UserDto};
use eyre::{Result, ensure, eyre};
use tracing::info;

#[derive(Parser)]
#[command(name = "users-smoke")]
#[command(about = "Exercise every users API operation once")]
struct Cli {
    /// Users collection URL
    #[arg(long, env = "USERS_API_URL", default_value = "http://localhost:8080/api/users")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "USERS_API_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = UserClient::new(config)?;

    run_scenario(&client).await?;

    info!("Smoke scenario passed");
    Ok(())
}

async fn run_scenario(client: &UserClient) -> Result<()> {
    let dob = NaiveDate::from_ymd_opt(1990, 4, 15);

    let created = client
        .create_user(&UserDto::new("Emma", "Watson", "emma.watson@example.com", dob))
        .await?;
    let id = created.id.ok_or_else(|| eyre!("created user has no id"))?;
    info!(user_id = id, "Created user");

    let fetched = client.get_user_by_id(id).await?;
    ensure!(fetched == created, "fetched {fetched:?} differs from created {created:?}");

    let all = client.get_all_users().await?;
    ensure!(
        all.iter().any(|user| user.id == Some(id)),
        "user {id} missing from listing"
    );
    info!(count = all.len(), "Listed users");

    let updated = client
        .update_user(
            id,
            &UserDto::new("Emma", "Granger", "emma.granger@example.com", dob),
        )
        .await?;
    ensure!(
        updated.last_name == "Granger" && updated.email == "emma.granger@example.com",
        "update not applied: {updated:?}"
    );
    info!(user_id = id, "Updated user");

    client.delete_user(id).await?;
    info!(user_id = id, "Deleted user");

    match client.get_user_by_id(id).await {
        Err(ClientError::NotFound(message)) => {
            info!(%message, "Deleted user is gone");
            Ok(())
        }
        Ok(user) => Err(eyre!("user {id} still present after delete: {user:?}")),
        Err(e) => Err(e.into()),
    }
}
