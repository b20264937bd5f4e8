//! Liveness Handler

use salvo::prelude::*;

const BANNER: &str = "Vibe backend running";

/// Liveness handler
///
/// Plain-text banner confirming the server is up.
#[endpoint(tags("health"), summary = "Liveness banner")]
pub(crate) async fn handler() -> &'static str {
    BANNER
}
