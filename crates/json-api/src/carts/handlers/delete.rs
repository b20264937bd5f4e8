//! Remove Cart Line Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vibe_app::domain::carts::models::CartLineId;

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*};

/// Cart Line Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineRemovedResponse {
    /// Always `true`
    pub success: bool,

    /// The removed line
    pub id: String,
}

/// Remove Cart Line Handler
#[endpoint(tags("cart"), summary = "Remove Cart Line")]
#[tracing::instrument(
    name = "cart.remove",
    skip(id, depot),
    fields(cart_line_id = tracing::field::Empty)
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartLineRemovedResponse>, ApiError> {
    let state = depot.state()?;
    let line = CartLineId::new(id.into_inner());

    tracing::Span::current().record("cart_line_id", tracing::field::display(&line));

    state
        .app
        .carts
        .remove_from_cart(line.clone())
        .await
        .map_err(into_api_error)?;

    Ok(Json(CartLineRemovedResponse {
        success: true,
        id: line.into_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vibe_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{errors::ErrorResponse, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_returns_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|line| line.as_str() == "l1")
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete("http://example.com/api/cart/l1")
            .send(&make_service(carts))
            .await;

        let body: CartLineRemovedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.id, "l1");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_line_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/api/cart/missing")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Cart item not found");

        Ok(())
    }
}
