use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Embedded assets keep a fixed path across releases, so they are cached for
/// an hour instead of being marked immutable.
const ASSET_POLICY: &str = "public, max-age=3600";
/// Pages are cheap to render and must pick up a new release right away.
const PAGE_POLICY: &str = "no-cache";
/// Submission results and health probes are never stored.
const NO_STORE_POLICY: &str = "no-store";

fn cache_policy(path: &str) -> &'static str {
    if path.starts_with("/static/") {
        ASSET_POLICY
    } else if path == "/contact" || path == "/health" {
        NO_STORE_POLICY
    } else {
        PAGE_POLICY
    }
}

/// Set `Cache-Control` according to the kind of route being served
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let policy = cache_policy(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
    if policy == NO_STORE_POLICY {
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware::from_fn};
    use tower::ServiceExt;

    use super::*;

    async fn cache_header(path: &str) -> (Option<String>, bool) {
        let app = Router::new()
            .fallback(|| async { "ok" })
            .layer(from_fn(cache_control_middleware));

        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        (
            headers
                .get(header::CACHE_CONTROL)
                .map(|v| v.to_str().unwrap().to_owned()),
            headers.contains_key(header::PRAGMA),
        )
    }

    #[tokio::test]
    async fn test_assets_are_cached_briefly() {
        let (policy, pragma) = cache_header("/static/js/contact.js").await;

        assert_eq!(policy.as_deref(), Some("public, max-age=3600"));
        assert!(!pragma);
    }

    #[tokio::test]
    async fn test_pages_revalidate() {
        assert_eq!(cache_header("/").await.0.as_deref(), Some("no-cache"));
        assert_eq!(cache_header("/portfolio").await.0.as_deref(), Some("no-cache"));
    }

    #[tokio::test]
    async fn test_contact_and_health_are_not_stored() {
        for path in ["/contact", "/health"] {
            let (policy, pragma) = cache_header(path).await;

            assert_eq!(policy.as_deref(), Some("no-store"));
            assert!(pragma);
        }
    }
}
