//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        carts::totals::{cart_total, line_total},
        products::models::ProductId,
    },
    ids::TypedId,
};

/// Cart Line Id
pub type CartLineId = TypedId<CartLine>;

/// Receipt Id
pub type ReceiptId = TypedId<Receipt>;

/// CartLine Model
///
/// One ledger entry holding the aggregated quantity for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub qty: u64,
    pub created_at: Option<Timestamp>,
}

/// New CartLine Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub qty: i64,
    pub created_at: Timestamp,
}

/// A cart line joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub qty: u64,
    pub line_total: Decimal,
}

impl CartItem {
    #[must_use]
    pub fn new(
        id: CartLineId,
        product_id: ProductId,
        name: String,
        price: Decimal,
        qty: u64,
    ) -> Self {
        Self {
            line_total: line_total(price, qty),
            id,
            product_id,
            name,
            price,
            qty,
        }
    }
}

/// The visible cart: joined items and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

impl Cart {
    #[must_use]
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            total: cart_total(items.iter().map(|item| item.line_total)),
            items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outcome of a quantity update.
#[derive(Debug, Clone, PartialEq)]
pub enum QtyUpdate {
    /// Non-positive quantity; the line is gone, whether or not it existed.
    Removed,

    /// The line now holds `qty`.
    Updated { id: CartLineId, qty: u64 },
}

/// Checkout contact details, passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Receipt line, a snapshot of a cart item at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    pub product_id: ProductId,
    pub name: String,
    pub qty: u64,
    pub price: Decimal,
    pub line_total: Decimal,
}

impl From<CartItem> for ReceiptItem {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            qty: item.qty,
            price: item.price,
            line_total: item.line_total,
        }
    }
}

/// Receipt Model
///
/// Built from the cart at checkout and returned to the caller. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub id: ReceiptId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub items: Vec<ReceiptItem>,
    pub total: Decimal,
    pub timestamp: Timestamp,
}

impl Receipt {
    #[must_use]
    pub fn from_cart(id: ReceiptId, customer: Customer, cart: Cart, timestamp: Timestamp) -> Self {
        Self {
            id,
            name: customer.name,
            email: customer.email,
            items: cart.items.into_iter().map(ReceiptItem::from).collect(),
            total: cart.total,
            timestamp,
        }
    }
}
