//! Get Cart Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vibe_app::domain::carts::models::{Cart, CartItem};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines whose product still exists, in insertion order
    pub items: Vec<CartItemResponse>,

    /// Sum of the rounded line totals
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total: cart.total,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Cart line identifier
    pub id: String,

    /// Product on this line
    pub product_id: String,

    /// Product name at read time
    pub name: String,

    /// Product price at read time
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Quantity
    pub qty: u64,

    /// `price * qty`, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub line_total: Decimal,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.into_string(),
            product_id: item.product_id.into_string(),
            name: item.name,
            price: item.price,
            qty: item.qty,
            line_total: item.line_total,
        }
    }
}

/// Get Cart Handler
#[endpoint(tags("cart"), summary = "Get Cart")]
#[tracing::instrument(name = "cart.get", skip(depot))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.state()?;

    let cart = state.app.carts.get_cart().await.map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
