use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kobo_core::cli::{AccountCommands, Cli, Commands};
use kobo_core::config::Config;
use kobo_core::session::SessionStore;
use kobo_core::store::AccountStore;
use kobo_core::{AppState, cli, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::from_env()?;

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match args.command {
        None | Some(Commands::Serve) => serve(config).await,
        Some(Commands::Accounts(AccountCommands::List)) => {
            cli::handle_accounts_list(&config).await
        }
        Some(Commands::Config) => cli::handle_config_validate(&config),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let store = AccountStore::new(&config.accounts_file);
    store.init().await?;
    tracing::info!(path = %store.path().display(), "account store ready");

    let state = AppState {
        store: Arc::new(store),
        sessions: Arc::new(SessionStore::new(config.session_ttl_secs)),
    };
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
