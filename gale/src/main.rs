use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::{error::Result, plan::PlanArgs, ship::ShipArgs};

mod error;
mod helpers;
mod plan;
mod ship;

#[derive(Parser)]
#[command(name = "gale")]
#[command(about = "Gale log shipment CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ship a log object to the destination stream
    Ship {
        #[clap(flatten)]
        inner: ShipArgs,
    },
    /// Show how a log object would be partitioned, without writing
    Plan {
        #[clap(flatten)]
        inner: PlanArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    gale_observability::init_observability();

    let cli = Cli::parse();

    let ct = CancellationToken::new();

    let ct_clone = ct.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        ct_clone.cancel();
    });

    match cli.command {
        Commands::Ship { inner } => inner.run(ct).await,
        Commands::Plan { inner } => inner.run(ct).await,
    }
}
