//! Embedded single-page UI
//!
//! `ui/dist` is produced by `trunk build` in the `ui` crate. Paths without a
//! matching asset (client-side routes such as `/thank-you`) get `index.html`.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct UiAssets;

const INDEX: &str = "index.html";

fn asset(path: &str) -> Option<Response> {
    let file = UiAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let cache = if path == INDEX {
        "no-cache"
    } else {
        "public, max-age=3600"
    };

    Some(
        (
            [
                (header::CONTENT_TYPE, mime.as_ref().to_string()),
                (header::CACHE_CONTROL, cache.to_string()),
            ],
            file.data,
        )
            .into_response(),
    )
}

pub async fn serve_ui(uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => INDEX,
        other => other,
    };

    asset(path)
        .or_else(|| asset(INDEX))
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "UI not built").into_response())
}
