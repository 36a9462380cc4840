//! Security headers set on every response.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Pages load only their own script and stylesheet, post the variant form
/// to this origin and open the event websocket.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data:; \
                   connect-src 'self' ws: wss:; \
                   form-action 'self'; \
                   frame-ancestors 'none'";

const SECURITY_HEADERS: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// Wrap `router` so every response carries the security headers,
/// overriding any value set by a handler.
pub(crate) fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_are_lowercase() {
        for (name, _) in SECURITY_HEADERS {
            assert_eq!(name, name.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_csp_allows_own_form_and_websocket() {
        assert!(CSP.contains("form-action 'self'"));
        assert!(CSP.contains("connect-src 'self' ws: wss:"));
        assert!(CSP.contains("frame-ancestors 'none'"));
    }
}
