/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `POST /summarizeReviews` - Review summary (requires authentication)
 *
 * Any other method on these paths gets the standard 400 error envelope,
 * except `OPTIONS`, which is answered with an empty 200 so browsers can
 * preflight.
 */

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use crate::backend::auth::handlers::{login, register};
use crate::backend::error::ApiError;
use crate::backend::reviews::handlers::summarize_reviews;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register).fallback(non_post))
        .route("/login", post(login).fallback(non_post))
        .route("/summarizeReviews", post(summarize_reviews).fallback(non_post))
}

/// Answer a non-POST request on an API route
async fn non_post(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    tracing::warn!("Rejected {} request", method);
    ApiError::MethodNotAllowed.into_response()
}
