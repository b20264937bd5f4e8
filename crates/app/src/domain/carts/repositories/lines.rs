//! Cart Lines Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::domain::{
    carts::models::{CartItem, CartLine, CartLineId, NewCartLine},
    products::{models::ProductId, repository::try_get_price},
};

const UPSERT_CART_LINE_SQL: &str = include_str!("../sql/upsert_cart_line.sql");
const UPDATE_CART_LINE_QTY_SQL: &str = include_str!("../sql/update_cart_line_qty.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");
const CLEAR_CART_SQL: &str = include_str!("../sql/clear_cart.sql");
const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteCartLinesRepository;

impl SqliteCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a line, or add to the quantity of the product's existing line.
    ///
    /// Returns `None` when the merged quantity would not fit in an `INTEGER`;
    /// the existing line is left untouched.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        line: &NewCartLine,
    ) -> Result<Option<CartLine>, sqlx::Error> {
        query_as::<Sqlite, CartLine>(UPSERT_CART_LINE_SQL)
            .bind(line.id.as_str())
            .bind(line.product_id.as_str())
            .bind(line.qty)
            .bind(line.created_at.as_millisecond())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_qty(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        line: &CartLineId,
        qty: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CART_LINE_QTY_SQL)
            .bind(line.as_str())
            .bind(qty)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        line: &CartLineId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(line.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete every line, including lines whose product no longer exists.
    pub(crate) async fn clear(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Lines inner-joined with their products, in insertion order.
    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<CartItem>, sqlx::Error> {
        query_as::<Sqlite, CartItem>(LIST_CART_ITEMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for CartLine {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let created_at = row
            .try_get::<Option<i64>, _>("createdAt")?
            .map(Timestamp::from_millisecond)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "createdAt".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: CartLineId::new(row.try_get::<String, _>("id")?),
            product_id: ProductId::new(row.try_get::<String, _>("productId")?),
            qty: try_get_qty(row)?,
            created_at,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for CartItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self::new(
            CartLineId::new(row.try_get::<String, _>("id")?),
            ProductId::new(row.try_get::<String, _>("productId")?),
            row.try_get("name")?,
            try_get_price(row, "price")?,
            try_get_qty(row)?,
        ))
    }
}

fn try_get_qty(row: &SqliteRow) -> Result<u64, sqlx::Error> {
    let qty: i64 = row.try_get("qty")?;

    u64::try_from(qty).map_err(|e| sqlx::Error::ColumnDecode {
        index: "qty".to_string(),
        source: Box::new(e),
    })
}
