use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::store::AccountStore;

#[derive(Parser)]
#[command(name = "kobo-core")]
#[command(about = "Kobo Core - account ledger backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Account store inspection commands
    #[command(subcommand)]
    Accounts(AccountCommands),

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// List stored accounts (PINs masked)
    List,
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    println!("Configuration:");
    println!("  Server Port: {}", config.server_port);
    println!("  Accounts File: {}", config.accounts_file.display());
    println!("  Session TTL: {}s", config.session_ttl_secs);

    println!("✓ Configuration is valid");
    Ok(())
}

pub async fn handle_accounts_list(config: &Config) -> anyhow::Result<()> {
    let store = AccountStore::new(&config.accounts_file);
    let accounts = store.read().await?;

    if accounts.is_empty() {
        println!("No accounts found");
        return Ok(());
    }

    println!(
        "{:<24} {:<16} {:<8} {:<14} {:<6}",
        "Name", "Phone", "PIN", "Balance", "Txns"
    );
    println!("{}", "-".repeat(70));

    for account in accounts {
        println!(
            "{:<24} {:<16} {:<8} {:<14} {:<6}",
            account.full_name,
            account.phone,
            mask_pin(&account.pin),
            account.balance.to_string(),
            account.transactions.len()
        );
    }

    Ok(())
}

fn mask_pin(pin: &str) -> String {
    "*".repeat(pin.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_pin_hides_every_digit() {
        assert_eq!(mask_pin("1234"), "****");
        assert_eq!(mask_pin("123456"), "******");
        assert_eq!(mask_pin(""), "");
    }
}
