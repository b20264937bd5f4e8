//! App Router

use std::sync::Arc;

use salvo::{Router, affix_state::inject, catch_panic::CatchPanic, trailing_slash::remove_slash};

use crate::{carts, checkout, healthcheck, observability::request_logging, products, state::State};

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(healthcheck::handler)
        .push(Router::with_path("api/products").get(products::index::handler))
        .push(
            Router::with_path("api/cart")
                .get(carts::get::handler)
                .post(carts::add::handler)
                .push(Router::with_path("update").post(carts::update::handler))
                .push(Router::with_path("{id}").delete(carts::delete::handler)),
        )
        .push(Router::with_path("api/checkout").post(checkout::create::handler))
}
