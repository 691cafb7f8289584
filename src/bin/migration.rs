use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inventory_api::{config, migrator::Migrator};
use sea_orm_migration::MigratorTrait;
use tracing::info;

#[derive(Parser)]
#[command(name = "migration", about = "Manage the inventory database schema", version)]
struct Cli {
    /// Overrides APP__DATABASE_URL and the config files
    #[arg(long, global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations
    Up(StepArgs),
    /// Roll back applied migrations
    Down(StepArgs),
    /// List applied and pending migrations
    Status,
    /// Drop every table and re-apply all migrations
    Fresh,
}

#[derive(Args)]
struct StepArgs {
    /// Number of migrations to apply or roll back (all when omitted)
    #[arg(long)]
    steps: Option<u32>,
}

fn resolve_database_url(cli_value: Option<String>) -> anyhow::Result<String> {
    if let Some(url) = cli_value {
        return Ok(url);
    }
    if let Ok(url) = std::env::var("APP__DATABASE_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    let cfg = config::load_config().context("failed to load configuration")?;
    Ok(cfg.database_url)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::init_tracing("info", false);

    let cli = Cli::parse();
    let database_url = resolve_database_url(cli.database_url)?;
    let db = inventory_api::migrator::connect_for_migration(&database_url).await?;

    match cli.command {
        Commands::Up(args) => {
            Migrator::up(&db, args.steps).await?;
            info!("Migrations applied");
        }
        Commands::Down(args) => {
            // a bare `down` rolls back a single migration
            Migrator::down(&db, Some(args.steps.unwrap_or(1))).await?;
            info!("Migrations rolled back");
        }
        Commands::Status => {
            for migration in Migrator::get_applied_migrations(&db).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                println!("pending  {}", migration.name());
            }
        }
        Commands::Fresh => {
            Migrator::fresh(&db).await?;
            info!("Schema recreated");
        }
    }

    db.close().await?;
    Ok(())
}
