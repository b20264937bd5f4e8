//! Update Cart Line Quantity Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vibe_app::domain::carts::models::{CartLineId, QtyUpdate};

use crate::{
    carts::{
        errors::{INVALID_CART_PAYLOAD, into_api_error},
        handlers::fields,
    },
    errors::ApiError,
    extensions::*,
};

const UPDATE_REQUIRED: &str = "id and qty required";

/// Update Quantity Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateQtyRequest {
    /// Cart line to update
    #[serde(default, deserialize_with = "fields::text")]
    pub id: Option<String>,

    /// New quantity; zero or less removes the line
    #[serde(default, deserialize_with = "fields::quantity")]
    pub qty: Option<i64>,
}

impl UpdateQtyRequest {
    fn validate(self) -> Result<(CartLineId, i64), ApiError> {
        let line = self.id.map(CartLineId::new);

        match (line, self.qty) {
            (Some(line), Some(qty)) if !line.is_blank() => Ok((line, qty)),
            _ => Err(ApiError::bad_request(UPDATE_REQUIRED)),
        }
    }
}

/// Update Quantity Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQtyResponse {
    /// Always `true`
    pub success: bool,

    /// Present when the line was removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,

    /// Present when the line was updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Present when the line was updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u64>,
}

impl From<QtyUpdate> for UpdateQtyResponse {
    fn from(update: QtyUpdate) -> Self {
        match update {
            QtyUpdate::Removed => Self {
                success: true,
                removed: Some(true),
                id: None,
                qty: None,
            },
            QtyUpdate::Updated { id, qty } => Self {
                success: true,
                removed: None,
                id: Some(id.into_string()),
                qty: Some(qty),
            },
        }
    }
}

/// Update Cart Line Quantity Handler
#[endpoint(tags("cart"), summary = "Update Cart Line Quantity")]
#[tracing::instrument(name = "cart.update", skip(req, depot))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UpdateQtyResponse>, ApiError> {
    let state = depot.state()?;

    let (line, qty) = req
        .json_or_default::<UpdateQtyRequest>(INVALID_CART_PAYLOAD)
        .await?
        .validate()?;

    let update = state
        .app
        .carts
        .update_qty(line, qty)
        .await
        .map_err(into_api_error)?;

    Ok(Json(update.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vibe_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{errors::ErrorResponse, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart/update").post(handler))
    }

    #[tokio::test]
    async fn test_update_returns_new_quantity() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_qty()
            .once()
            .withf(|line, qty| line.as_str() == "l1" && *qty == 4)
            .return_once(|line, _| Ok(QtyUpdate::Updated { id: line, qty: 4 }));

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "id": "l1", "qty": 4 }))
            .send(&make_service(carts))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "success": true, "id": "l1", "qty": 4 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_reports_removed() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_qty()
            .once()
            .withf(|line, qty| line.as_str() == "gone" && *qty == 0)
            .return_once(|_, _| Ok(QtyUpdate::Removed));

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "id": "gone", "qty": 0 }))
            .send(&make_service(carts))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "success": true, "removed": true }));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_qty_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_qty().never();

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "id": "l1" }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, UPDATE_REQUIRED);

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_or_mistyped_fields_return_json_400() -> TestResult {
        for body in [
            json!({ "id": "", "qty": 2 }),
            json!({ "id": "   ", "qty": 2 }),
            json!({ "id": 12, "qty": 2 }),
            json!({ "id": "l1", "qty": "2" }),
            json!({ "id": "l1", "qty": 1.5 }),
        ] {
            let mut carts = MockCartsService::new();

            carts.expect_update_qty().never();

            let mut res = TestClient::post("http://example.com/api/cart/update")
                .json(&body)
                .send(&make_service(carts))
                .await;

            let error: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "body {body}");
            assert_eq!(error.error, UPDATE_REQUIRED, "body {body}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_whole_float_quantity_is_accepted() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_qty()
            .once()
            .withf(|line, qty| line.as_str() == "l1" && *qty == 3)
            .return_once(|line, _| Ok(QtyUpdate::Updated { id: line, qty: 3 }));

        let res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "id": "l1", "qty": 3.0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_returns_json_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_qty().never();

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .raw_json("[1, 2")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, INVALID_CART_PAYLOAD);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_line_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_qty()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let mut res = TestClient::post("http://example.com/api/cart/update")
            .json(&json!({ "id": "missing", "qty": 3 }))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Cart item not found");

        Ok(())
    }
}
