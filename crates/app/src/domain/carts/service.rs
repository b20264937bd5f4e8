//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, error, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{
                Cart, CartLine, CartLineId, Customer, NewCartLine, QtyUpdate, Receipt, ReceiptId,
            },
            repositories::SqliteCartLinesRepository,
        },
        products::models::ProductId,
    },
};

const ADD_TO_CART_REQUIRED: &str = "productId and qty required";
const QTY_TOO_LARGE: &str = "qty too large";

#[derive(Debug, Clone)]
pub struct SqliteCartsService {
    db: Db,
    lines_repository: SqliteCartLinesRepository,
}

impl SqliteCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            lines_repository: SqliteCartLinesRepository::new(),
        }
    }

    async fn delete_line(&self, line: &CartLineId) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.lines_repository.delete_line(&mut tx, line).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn clear(&self) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.lines_repository.clear(&mut tx).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[async_trait]
impl CartsService for SqliteCartsService {
    #[tracing::instrument(
        name = "carts.service.add_to_cart",
        skip(self),
        fields(product_id = %product),
        err
    )]
    async fn add_to_cart(
        &self,
        product: ProductId,
        qty: i64,
    ) -> Result<CartLine, CartsServiceError> {
        if product.is_blank() || qty <= 0 {
            return Err(CartsServiceError::Validation(ADD_TO_CART_REQUIRED));
        }

        let mut tx = self.db.begin().await?;

        let line = self
            .lines_repository
            .upsert_line(
                &mut tx,
                &NewCartLine {
                    id: CartLineId::generate(),
                    product_id: product,
                    qty,
                    created_at: Timestamp::now(),
                },
            )
            .await?
            .ok_or(CartsServiceError::Validation(QTY_TOO_LARGE))?;

        tx.commit().await?;

        info!(
            cart_line_id = %line.id,
            product_id = %line.product_id,
            qty = line.qty,
            "added to cart"
        );

        Ok(line)
    }

    async fn remove_from_cart(&self, line: CartLineId) -> Result<(), CartsServiceError> {
        if self.delete_line(&line).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        info!(cart_line_id = %line, "removed from cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.service.update_qty",
        skip(self),
        fields(cart_line_id = %line),
        err
    )]
    async fn update_qty(
        &self,
        line: CartLineId,
        qty: i64,
    ) -> Result<QtyUpdate, CartsServiceError> {
        if qty <= 0 {
            let removed = self.delete_line(&line).await?;

            debug!(cart_line_id = %line, removed, "non-positive quantity, line removed");

            return Ok(QtyUpdate::Removed);
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self.lines_repository.update_qty(&mut tx, &line, qty).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(QtyUpdate::Updated {
            id: line,
            qty: qty.unsigned_abs(),
        })
    }

    async fn get_cart(&self) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.lines_repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(Cart::new(items))
    }

    #[tracing::instrument(name = "carts.service.checkout", skip(self, customer), err)]
    async fn checkout(&self, customer: Customer) -> Result<Receipt, CartsServiceError> {
        // Snapshot and clear are separate transactions: lines added in between
        // are cleared without appearing on the receipt.
        let cart = self.get_cart().await?;

        if cart.is_empty() {
            return Err(CartsServiceError::EmptyCart);
        }

        let receipt = Receipt::from_cart(ReceiptId::generate(), customer, cart, Timestamp::now());

        match self.clear().await {
            Ok(cleared) => debug!(cleared, "cleared cart after checkout"),
            Err(source) => error!("failed to clear cart after checkout: {source}"),
        }

        info!(
            receipt_id = %receipt.id,
            items = receipt.items.len(),
            total = %receipt.total,
            "checkout completed"
        );

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add `qty` of a product, merging into the product's existing line.
    async fn add_to_cart(
        &self,
        product: ProductId,
        qty: i64,
    ) -> Result<CartLine, CartsServiceError>;

    /// Remove a line. Fails with `NotFound` when no line has the given id.
    async fn remove_from_cart(&self, line: CartLineId) -> Result<(), CartsServiceError>;

    /// Set a line's quantity. A non-positive quantity removes the line and
    /// always succeeds.
    async fn update_qty(
        &self,
        line: CartLineId,
        qty: i64,
    ) -> Result<QtyUpdate, CartsServiceError>;

    /// The cart joined against the catalog, with totals.
    async fn get_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Snapshot the cart into a receipt, then empty the ledger.
    async fn checkout(&self, customer: Customer) -> Result<Receipt, CartsServiceError>;
}
