use axum::{body::Body, http::header, response::Response};
use std::sync::LazyLock;

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        const MINIFY_PAGES: bool = false;
    } else {
        const MINIFY_PAGES: bool = true;
    }
}

// Pages link their stylesheet and script from /static, so only the markup
// itself needs minifying.
static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    ..Default::default()
});

fn is_html(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h.starts_with("text/html"))
}

fn minify_page(html: &[u8]) -> Vec<u8> {
    minify_html::minify(html, &MINIFY_CFG)
}

/// Minify rendered pages in release builds
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !MINIFY_PAGES || !is_html(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minify_page(&bytes)))
}
