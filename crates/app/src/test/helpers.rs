//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::carts::{
        CartsService, CartsServiceError,
        models::{CartItem, CartLine, CartLineId},
    },
    test::TestContext,
};

pub(crate) async fn add(
    ctx: &TestContext,
    product: &str,
    qty: i64,
) -> Result<CartLine, CartsServiceError> {
    ctx.carts.add_to_cart(product.into(), qty).await
}

pub(crate) fn item_for(
    line: &CartLineId,
    product: &str,
    name: &str,
    price: Decimal,
    qty: u64,
) -> CartItem {
    CartItem::new(line.clone(), product.into(), name.to_string(), price, qty)
}
