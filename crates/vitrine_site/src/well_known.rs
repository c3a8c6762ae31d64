//! Well-known path hook
//!
//! Ad-network verification fetches `/app-ads.txt` from the site root and
//! expects a plain-text seller declaration. The hook answers that one
//! path with a fixed body and fixed caching headers and forwards every
//! other request unchanged.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The only path this hook answers
pub const APP_ADS_PATH: &str = "/app-ads.txt";

/// Authorized seller declaration served at [`APP_ADS_PATH`]
pub const APP_ADS_BODY: &str = "google.com, pub-4916221468288421, DIRECT, f08c47fec0942fa0\n";

/// Cache policy for the declaration
pub const APP_ADS_CACHE_CONTROL: &str = "public, max-age=3600";

/// Middleware answering the app-ads request before routing sees it
pub async fn serve_app_ads(request: Request, next: Next) -> Response {
    if request.uri().path() != APP_ADS_PATH {
        return next.run(request).await;
    }
    (
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CACHE_CONTROL, APP_ADS_CACHE_CONTROL),
        ],
        APP_ADS_BODY,
    )
        .into_response()
}
