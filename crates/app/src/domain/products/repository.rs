//! Products Repository

use rust_decimal::Decimal;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, query_scalar, sqlite::SqliteRow};

use crate::domain::products::models::{NewProduct, Product, ProductId};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Sqlite, i64>(COUNT_PRODUCTS_SQL)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &NewProduct,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CREATE_PRODUCT_SQL)
            .bind(product.id.as_str())
            .bind(product.name.as_str())
            .bind(price_to_real(product.price, "price")?)
            .bind(product.description.as_deref())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            price: try_get_price(row, "price")?,
            description: row.try_get("description")?,
        })
    }
}

/// Decode a `REAL` money column into a [`Decimal`].
pub(crate) fn try_get_price(row: &SqliteRow, col: &str) -> Result<Decimal, sqlx::Error> {
    let price: f64 = row.try_get(col)?;

    Decimal::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn price_to_real(price: Decimal, col: &str) -> Result<f64, sqlx::Error> {
    f64::try_from(price).map_err(|e| sqlx::Error::Encode(format!("{col}: {e}").into()))
}
