//! Cart Errors

use tracing::error;

use vibe_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

const CART_ITEM_NOT_FOUND: &str = "Cart item not found";
const CART_IS_EMPTY: &str = "Cart is empty";
pub(crate) const INVALID_CART_PAYLOAD: &str = "Invalid cart payload";

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::Validation(message) => ApiError::bad_request(message),
        CartsServiceError::NotFound => ApiError::not_found(CART_ITEM_NOT_FOUND),
        CartsServiceError::EmptyCart => ApiError::bad_request(CART_IS_EMPTY),
        CartsServiceError::InvalidData => ApiError::bad_request(INVALID_CART_PAYLOAD),
        CartsServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            ApiError::internal()
        }
    }
}
