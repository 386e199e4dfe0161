//! Apply, or rebuild, the users schema.
//!
//! ```text
//! users-migrate --database-url postgres://localhost/users
//! users-migrate --reset
//! ```

use std::env;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use users_backend::outbound::persistence::{rebuild_schema, run_pending_migrations};

/// `users-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "users-migrate",
    about = "Apply pending users schema migrations",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Revert every migration first, dropping all users.
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    // The migrator logs human-readable lines; the server logs JSON.
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();

    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url, env::var("DATABASE_URL").ok())?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let applied = runtime.block_on(async {
        if args.reset {
            rebuild_schema(&database_url).await
        } else {
            run_pending_migrations(&database_url).await
        }
    })?;
    info!(applied, reset = args.reset, "migrations complete");
    Ok(())
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }
    from_env
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| eyre!("database URL missing: set --database-url or DATABASE_URL"))
}
