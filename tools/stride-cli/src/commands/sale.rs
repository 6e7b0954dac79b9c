//! `stride sale` - sale overview with an optional live countdown.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::style;

use stride_commerce::prelude::*;

use crate::output::Output;

#[derive(Args)]
pub struct SaleArgs {
    /// Run a live flash-sale countdown for this many seconds
    #[arg(long)]
    pub watch: Option<u64>,
}

pub async fn run(args: SaleArgs, catalog: &Catalog, out: &Output) -> Result<()> {
    let summary = SaleSummary::compute(catalog);

    if out.json() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        out.heading(&format!("Sale ({} products)", summary.product_count));
        out.info(&format!(
            "total savings {} · up to {}% off",
            style(summary.total_savings.display()).green(),
            summary.max_discount_percent
        ));

        let params = StorePage::Sale
            .default_params()
            .with_sort(SortKey::DiscountDesc);
        for product in StorePage::Sale.browse(catalog, &params) {
            out.product_line(product, false);
        }
    }

    if let Some(secs) = args.watch {
        watch_countdown(secs, out).await?;
    }

    Ok(())
}

/// Drive the cosmetic countdown on a one-second interval.
///
/// The ticker runs as its own task; when the command is interrupted the
/// task's handle is aborted so the periodic work never outlives the view.
async fn watch_countdown(secs: u64, out: &Output) -> Result<()> {
    let mut countdown = Countdown::from_secs(secs);

    let mut handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first tick completes immediately; consume it so the display
        // starts at the full duration.
        interval.tick().await;

        println!("  sale ends in {}", countdown);
        loop {
            interval.tick().await;
            let finished = countdown.tick();
            println!("  sale ends in {}", countdown);
            if finished {
                break;
            }
        }
    });

    tokio::select! {
        result = &mut handle => {
            result?;
            out.success("Countdown finished");
        }
        _ = tokio::signal::ctrl_c() => {
            handle.abort();
            out.warn("Countdown canceled");
        }
    }

    Ok(())
}
