/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API routes, the 404 fallback and the cross-cutting layers into a
 * single Axum router.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. CORS - headers on every response, preflight answered directly
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::middleware::with_cors;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `POST /register` - User registration
/// - `POST /login` - User login
/// - `POST /summarizeReviews` - Review summary
///
/// ## Fallback
///
/// Unknown paths return 404 in the standard error envelope.
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(Router::new()).fallback(not_found);

    with_cors(router)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
