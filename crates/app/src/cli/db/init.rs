use clap::Args;
use vibe_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// `SQLite` connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://vibe.db")]
    database_url: String,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise database: {error}"))?;

    let seeded = app
        .seed_catalog()
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    println!("database: {}", args.database_url);
    println!("seeded_products: {seeded}");

    Ok(())
}
