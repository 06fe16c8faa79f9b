//! # Diner
//!
//! A terminal ordering kiosk: browse the menu, build an order, pay, done.
//!
//! - **[catalog]**: the fixed menu, built in or loaded from TOML.
//! - **[order_actor]**: the order state machine, hosted one session per customer.
//! - **[kiosk]**: turns typed lines into order commands and rendered text.
//! - **[lifecycle]**: starts and stops the actors.
//!
//! Logs go to stderr; set `RUST_LOG` or `--log` to see them.

use anyhow::Context;
use clap::Parser;
use diner::catalog::Catalog;
use diner::config::{load_settings, Args};
use diner::kiosk::Kiosk;
use diner::lifecycle::KioskSystem;
use session_actor::tracing::setup_tracing;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;
    setup_tracing(&settings.log_filter);

    let catalog = match &settings.menu_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("cannot serve menu '{}'", path.display()))?,
        None => Catalog::default(),
    };
    info!(items = catalog.len(), policy = %settings.policy, "Starting kiosk");

    let system = KioskSystem::new(Arc::new(catalog));
    let mut kiosk = Kiosk::open(
        system.order_client.clone(),
        system.catalog.clone(),
        settings.policy,
    )
    .await?;

    print!("{}", kiosk.welcome().await?);
    prompt(kiosk.input_label())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let step = kiosk.handle_line(&line).await?;
        print!("{}", step.output);
        if step.quit {
            break;
        }
        prompt(kiosk.input_label())?;
    }

    kiosk.close().await?;
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

fn prompt(label: &str) -> io::Result<()> {
    print!("{label}");
    io::stdout().flush()
}
