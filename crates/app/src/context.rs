//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, SqliteCartsService},
        products::{ProductsService, ProductsServiceError, SqliteProductsService, seed},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] MigrateError),

    #[error("failed to seed product catalog")]
    Seed(#[source] ProductsServiceError),
}

/// Process-wide services. The cart behind `carts` is shared by every caller
/// and lives as long as the process.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            carts: Arc::new(SqliteCartsService::new(db)),
        }
    }

    /// Build application context from a database URL, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("database ready");

        Ok(Self::new(Db::new(pool)))
    }

    /// Insert the fixed catalog when no products exist yet.
    ///
    /// Returns the number of products inserted.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or written.
    pub async fn seed_catalog(&self) -> Result<u64, AppInitError> {
        let inserted = self
            .products
            .seed_products(seed::catalog())
            .await
            .map_err(AppInitError::Seed)?;

        if inserted > 0 {
            info!(inserted, "seeded products");
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn seed_catalog_runs_once() -> TestResult {
        let ctx = TestContext::new().await;
        let app = AppContext::new(Db::new(ctx.db.pool().clone()));

        assert_eq!(app.seed_catalog().await?, 6);
        assert_eq!(app.seed_catalog().await?, 0);
        assert_eq!(app.products.list_products().await?.len(), 6);

        Ok(())
    }
}
