//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product},
        repository::SqliteProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn seed_products(&self, products: Vec<NewProduct>) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        if self.repository.count_products(&mut tx).await? > 0 {
            debug!("catalog already populated, skipping seed");

            return Ok(0);
        }

        let mut inserted = 0;

        for product in &products {
            inserted += self.repository.create_product(&mut tx, product).await?;
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Inserts the given products when the catalog is empty.
    ///
    /// Returns the number of inserted products, zero when the catalog was
    /// already populated.
    async fn seed_products(&self, products: Vec<NewProduct>) -> Result<u64, ProductsServiceError>;
}
