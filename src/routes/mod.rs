pub mod contact;
pub mod health;
pub mod listings;
pub mod pages;

/// Check if the request comes from HTMX (has HX-Request header).
pub fn is_htmx(headers: &axum::http::HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn test_is_htmx_keys_off_the_hx_request_header() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("HX-Request", "true".parse().unwrap());
        assert!(is_htmx(&headers));
    }
}
