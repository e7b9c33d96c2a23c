//! HTTP server command
//!
//! Resolves configuration from flags and environment, builds the store and
//! runs the server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use pressroom_core::{MemoryStore, Store};
use pressroom_server::db::{schema, DEFAULT_MAX_CONNECTIONS};
use pressroom_server::{run_server, AppState, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PRESSROOM_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "memory")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "PRESSROOM_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep all data in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// Skip creating the users/posts tables on startup
    #[arg(long)]
    pub no_schema: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = open_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting pressroom server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

async fn open_store(args: &ServeArgs) -> Result<Arc<dyn Store>> {
    if args.memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let database_url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let store = PgStore::connect(database_url, args.max_connections)
        .await
        .context("Failed to connect to database")?;

    if !args.no_schema {
        schema::ensure_schema(store.pool())
            .await
            .context("Failed to bootstrap database schema")?;
    }

    Ok(Arc::new(store))
}
