//! Checkout Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vibe_app::domain::carts::models::{Customer, Receipt, ReceiptItem};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*};

const INVALID_CHECKOUT_PAYLOAD: &str = "Invalid checkout payload";

/// Checkout Request
///
/// The whole body may be omitted.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Customer name, echoed on the receipt
    #[serde(default)]
    pub name: Option<String>,

    /// Customer email, echoed on the receipt
    #[serde(default)]
    pub email: Option<String>,
}

impl From<CheckoutRequest> for Customer {
    fn from(request: CheckoutRequest) -> Self {
        Self {
            name: request.name.filter(|name| !name.is_empty()),
            email: request.email.filter(|email| !email.is_empty()),
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// The receipt for the purchased cart
    pub receipt: ReceiptResponse,
}

/// Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptResponse {
    /// Receipt identifier
    pub id: String,

    /// Customer name, `null` when not given
    pub name: Option<String>,

    /// Customer email, `null` when not given
    pub email: Option<String>,

    /// Snapshot of the cart at checkout
    pub items: Vec<ReceiptItemResponse>,

    /// Sum of the rounded line totals
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id.into_string(),
            name: receipt.name,
            email: receipt.email,
            items: receipt.items.into_iter().map(Into::into).collect(),
            total: receipt.total,
            timestamp: format!("{:.3}", receipt.timestamp),
        }
    }
}

/// Receipt Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptItemResponse {
    /// Purchased product
    pub product_id: String,

    /// Product name at checkout
    pub name: String,

    /// Quantity
    pub qty: u64,

    /// Unit price at checkout
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// `price * qty`, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub line_total: Decimal,
}

impl From<ReceiptItem> for ReceiptItemResponse {
    fn from(item: ReceiptItem) -> Self {
        Self {
            product_id: item.product_id.into_string(),
            name: item.name,
            qty: item.qty,
            price: item.price,
            line_total: item.line_total,
        }
    }
}

/// Checkout Handler
///
/// Turns the current cart into a receipt and empties the cart.
#[endpoint(tags("checkout"), summary = "Checkout")]
#[tracing::instrument(name = "checkout.create", skip(req, depot))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let state = depot.state()?;
    let customer = Customer::from(
        req.json_or_default::<CheckoutRequest>(INVALID_CHECKOUT_PAYLOAD)
            .await?,
    );

    let receipt = state
        .app
        .carts
        .checkout(customer)
        .await
        .map_err(into_api_error)?;

    Ok(Json(CheckoutResponse {
        receipt: receipt.into(),
    }))
}
