use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use orderflow_core::UserId;
use orderflow_infra::{CsvExportFileSystem, Fixture, OrderflowConfig};
use orderflow_orders::{Order, OrderProcessor, ProcessingSummary};

/// Run one order-processing pass for a user against fixture-seeded collaborators.
#[derive(Debug, Parser)]
#[command(name = "orderflow-runner", version)]
struct Cli {
    /// User whose orders are processed.
    #[arg(long)]
    user: UserId,

    /// Fixture document seeding the database and classification API.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Directory export artifacts are written to.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Explicit configuration file (defaults to ./orderflow.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct PassReport<'a> {
    user_id: UserId,
    orders: &'a [Order],
    summary: ProcessingSummary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OrderflowConfig::load_file(path),
        None => OrderflowConfig::load(),
    }
    .context("failed to load configuration")?;

    orderflow_observability::init(config.log.format);

    let fixtures = cli
        .fixtures
        .or(config.fixtures.path)
        .context("no fixture document given (use --fixtures or fixtures.path)")?;
    let (db, api) = Fixture::load(&fixtures)
        .and_then(Fixture::into_collaborators)
        .with_context(|| format!("failed to seed collaborators from {}", fixtures.display()))?;

    let export_dir = cli.export_dir.unwrap_or(config.export.dir);
    tracing::info!(export_dir = %export_dir.display(), "export directory");

    let processor = OrderProcessor::new(db, api, CsvExportFileSystem::new(export_dir));
    let orders = match processor.process(cli.user) {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!(error = ?e, "processing pass failed");
            return Err(e).with_context(|| format!("processing pass for user {} failed", cli.user));
        }
    };

    let report = PassReport {
        user_id: cli.user,
        summary: ProcessingSummary::from_orders(&orders),
        orders: &orders,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
