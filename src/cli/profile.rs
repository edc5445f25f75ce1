//! Profile commands: password change and account deletion.

use anyhow::Result;
use colored::*;
use dialoguer::{Confirm, Password};
use std::sync::Arc;

use crate::application::services::ProfileService;
use crate::cli::require_session;
use crate::config::Config;
use crate::infrastructure::{HttpApiGateway, SessionStore};

fn service(config: &Config) -> Result<ProfileService<HttpApiGateway>> {
    let session = require_session(config)?;
    let gateway = Arc::new(HttpApiGateway::new(config, Some(session))?);
    Ok(ProfileService::new(gateway))
}

pub async fn change_password(config: &Config) -> Result<()> {
    println!("{}", "🔑 Change password".bright_blue().bold());
    println!();

    let current = Password::new().with_prompt("Current password").interact()?;
    let new = Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()?;

    service(config)?.change_password(&current, &new).await?;

    println!();
    println!("{}", "✅ Password changed".green().bold());
    Ok(())
}

pub async fn delete_account(config: &Config, skip_confirm: bool) -> Result<()> {
    println!("{}", "⚠️  Delete account".bright_red().bold());
    println!();

    if !skip_confirm {
        let first = Confirm::new()
            .with_prompt("Delete your account? This cannot be undone")
            .default(false)
            .interact()?;
        if !first {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }

        let second = Confirm::new()
            .with_prompt("This permanently deletes all your links and analytics. Are you absolutely sure?")
            .default(false)
            .interact()?;
        if !second {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service(config)?.delete_account().await?;
    SessionStore::new(&config.token_file).clear()?;

    println!();
    println!("{}", "✅ Account deleted".green().bold());
    Ok(())
}
