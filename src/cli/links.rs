//! Link-management commands: the dashboard table.

use anyhow::Result;
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::cli::{render, require_session};
use crate::config::Config;
use crate::infrastructure::HttpApiGateway;

fn service(config: &Config) -> Result<LinkService<HttpApiGateway>> {
    let session = require_session(config)?;
    let gateway = Arc::new(HttpApiGateway::new(config, Some(session))?);
    Ok(LinkService::new(gateway))
}

pub async fn list(config: &Config, page: u32, per_page: u32) -> Result<()> {
    let (links, meta) = service(config)?.list(page, per_page).await?;

    render::links_table(&links);
    render::page_meta(&meta);
    Ok(())
}

pub async fn add(config: &Config, url: String) -> Result<()> {
    let link = service(config)?.shorten(&url).await?;

    println!("{}", "✅ Link created".green().bold());
    println!("  {} → {}", link.short_url.cyan(), link.original_url);
    Ok(())
}

pub async fn edit(
    config: &Config,
    id: i64,
    url: String,
    short_code: Option<String>,
) -> Result<()> {
    let link = service(config)?
        .update(id, &url, short_code.as_deref())
        .await?;

    println!("{}", "✅ Link updated".green().bold());
    println!("  {} → {}", link.short_url.cyan(), link.original_url);
    Ok(())
}

pub async fn remove(config: &Config, id: i64, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {id}? This cannot be undone"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service(config)?.delete(id).await?;

    println!("{}", "✅ Link deleted".green().bold());
    Ok(())
}
