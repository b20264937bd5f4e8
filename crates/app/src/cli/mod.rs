use clap::{Parser, Subcommand};

mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "vibe-app", about = "Vibe store admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Products(command) => products::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_db_init_with_database_url() {
        let cli = Cli::try_parse_from([
            "vibe-app",
            "db",
            "init",
            "--database-url",
            "sqlite::memory:",
        ]);

        assert!(cli.is_ok(), "expected db init to parse, got {cli:?}");
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let cli = Cli::try_parse_from(["vibe-app", "orders", "list"]);

        assert!(cli.is_err());
    }
}
