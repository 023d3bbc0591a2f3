pub mod login;

use axum::routing::post;
use axum::Router;
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

/// Build the application router.
pub fn router() -> Router {
    Router::new().route("/login", post(login::login)).layer(
        TraceLayer::new_for_http()
            .on_request(trace::DefaultOnRequest::new().level(Level::DEBUG))
            .on_response(trace::DefaultOnResponse::new().level(Level::DEBUG))
            .on_failure(trace::DefaultOnFailure::new().level(Level::ERROR)),
    )
}
