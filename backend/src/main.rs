//! Backend entry-point: wires the login pipeline, HTTP surface, and docs.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use backend::domain::Account;
use backend::domain::ports::PasswordHasher;
use backend::inbound::http::AppState;
use backend::outbound::{InMemoryAccountRepository, Sha256PasswordHasher};
use backend::pipeline::TracingLifecycleLog;
use backend::server::{self, AppConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let hasher = Sha256PasswordHasher;
    let accounts = InMemoryAccountRepository::new();
    accounts.insert(Account::new(
        Uuid::new_v4(),
        config.seed_username(),
        hasher.hash(config.seed_password()),
    ));

    let state = AppState::new(
        Arc::new(accounts),
        Arc::new(hasher),
        Arc::new(TracingLifecycleLog),
    );

    info!(addr = %config.bind_addr(), "starting server");
    server::run(config, state).await
}
