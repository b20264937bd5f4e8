//! Add To Cart Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vibe_app::domain::{carts::models::CartLine, products::models::ProductId};

use crate::{
    carts::{
        errors::{INVALID_CART_PAYLOAD, into_api_error},
        handlers::fields,
    },
    errors::ApiError,
    extensions::*,
};

const ADD_TO_CART_REQUIRED: &str = "productId and qty required";

/// Add To Cart Request
///
/// Fields of the wrong type decode as missing so they produce the cart's own
/// validation message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddToCartRequest {
    /// Product to add
    #[serde(default, deserialize_with = "fields::text")]
    pub product_id: Option<String>,

    /// Quantity to add, must be a positive integer
    #[serde(default, deserialize_with = "fields::quantity")]
    pub qty: Option<i64>,
}

impl AddToCartRequest {
    fn validate(self) -> Result<(ProductId, i64), ApiError> {
        let product = self.product_id.map(ProductId::new);

        match (product, self.qty) {
            (Some(product), Some(qty)) if !product.is_blank() && qty > 0 => Ok((product, qty)),
            _ => Err(ApiError::bad_request(ADD_TO_CART_REQUIRED)),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    /// Cart line identifier
    pub id: String,

    /// Product on this line
    pub product_id: String,

    /// Aggregated quantity for the product
    pub qty: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id.into_string(),
            product_id: line.product_id.into_string(),
            qty: line.qty,
        }
    }
}

/// Add To Cart Handler
///
/// Adds to the product's existing line when there is one.
#[endpoint(tags("cart"), summary = "Add To Cart")]
#[tracing::instrument(
    name = "cart.add",
    skip(req, depot),
    fields(product_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartLineResponse>, ApiError> {
    let state = depot.state()?;

    let (product, qty) = req
        .json_or_default::<AddToCartRequest>(INVALID_CART_PAYLOAD)
        .await?
        .validate()?;

    tracing::Span::current().record("product_id", tracing::field::display(&product));

    let line = state
        .app
        .carts
        .add_to_cart(product, qty)
        .await
        .map_err(into_api_error)?;

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vibe_app::domain::carts::{CartsServiceError, MockCartsService, models::CartLineId};

    use crate::{errors::ErrorResponse, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart").post(handler))
    }

    #[tokio::test]
    async fn test_add_to_cart_returns_line() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .withf(|product, qty| product.as_str() == "p1" && *qty == 2)
            .return_once(|product, _| {
                Ok(CartLine {
                    id: CartLineId::new("l1"),
                    product_id: product,
                    qty: 5,
                    created_at: None,
                })
            });

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "p1", "qty": 2 }))
            .send(&make_service(carts))
            .await;

        let body: CartLineResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, "l1");
        assert_eq!(body.product_id, "p1");
        assert_eq!(body.qty, 5, "qty is the product's new total");

        Ok(())
    }

    async fn rejected_with(body: serde_json::Value) -> TestResult<(Option<StatusCode>, String)> {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&body)
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        Ok((res.status_code, body.error))
    }

    #[tokio::test]
    async fn test_missing_fields_return_json_400() -> TestResult {
        for body in [
            json!({}),
            json!({ "productId": "p1" }),
            json!({ "qty": 1 }),
            json!({ "productId": "p1", "qty": 0 }),
            json!({ "productId": "p1", "qty": -2 }),
            json!({ "productId": "   ", "qty": 1 }),
        ] {
            let (status, error) = rejected_with(body.clone()).await?;

            assert_eq!(status, Some(StatusCode::BAD_REQUEST), "body {body}");
            assert_eq!(error, ADD_TO_CART_REQUIRED, "body {body}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_mistyped_quantity_returns_json_400() -> TestResult {
        for body in [
            json!({ "productId": "p1", "qty": "2" }),
            json!({ "productId": "p1", "qty": 1.5 }),
            json!({ "productId": 7, "qty": 1 }),
        ] {
            let (status, error) = rejected_with(body.clone()).await?;

            assert_eq!(status, Some(StatusCode::BAD_REQUEST), "body {body}");
            assert_eq!(error, ADD_TO_CART_REQUIRED, "body {body}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_whole_float_quantity_is_accepted() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .withf(|product, qty| product.as_str() == "p1" && *qty == 2)
            .return_once(|product, qty| {
                Ok(CartLine {
                    id: CartLineId::new("l1"),
                    product_id: product,
                    qty: qty.unsigned_abs(),
                    created_at: None,
                })
            });

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "p1", "qty": 2.0 }))
            .send(&make_service(carts))
            .await;

        let body: CartLineResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.qty, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_returns_json_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart")
            .raw_json("{not json")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, INVALID_CART_PAYLOAD);

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::post("http://example.com/api/cart")
            .json(&json!({ "productId": "p1", "qty": 1 }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "DB error");

        Ok(())
    }
}
