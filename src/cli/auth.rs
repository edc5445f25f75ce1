//! Login, registration, and logout commands.

use anyhow::Result;
use colored::*;
use dialoguer::{Input, Password};
use std::sync::Arc;

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::session::RegisterInput;
use crate::infrastructure::{HttpApiGateway, SessionStore};

pub async fn login(config: &Config, email: Option<String>) -> Result<()> {
    println!("{}", "🔐 Log in".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let gateway = Arc::new(HttpApiGateway::new(config, None)?);
    let session = AuthService::new(gateway).login(&email, &password).await?;

    SessionStore::new(&config.token_file).save(&session)?;

    println!();
    println!("{}", "✅ Logged in".green().bold());
    println!(
        "  Token stored at {}",
        config.token_file.display().to_string().bright_black()
    );
    Ok(())
}

pub async fn register(config: &Config) -> Result<()> {
    println!("{}", "🚀 Create an account".bright_blue().bold());
    println!();

    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let input = RegisterInput {
        name,
        username,
        email,
        password,
    };

    let gateway = Arc::new(HttpApiGateway::new(config, None)?);
    let session = AuthService::new(gateway).register(input).await?;

    SessionStore::new(&config.token_file).save(&session)?;

    println!();
    println!("{}", "✅ Account created and logged in".green().bold());
    Ok(())
}

pub fn logout(config: &Config) -> Result<()> {
    SessionStore::new(&config.token_file).clear()?;
    println!("{}", "✅ Logged out".green().bold());
    Ok(())
}
