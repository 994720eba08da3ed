use http::header::AUTHORIZATION;
use http::HeaderMap;

/// Extract the bearer credential presented by a request, if any.
///
/// The credential must arrive in the `Authorization` header as exactly
/// `Bearer <token>`: the scheme literal is case-sensitive and there is no
/// cookie or query-parameter fallback. A missing header, a non-UTF-8
/// value, another scheme, or an empty token all mean the caller is
/// anonymous.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_well_formed_value() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with("bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_other_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_scheme_without_token() {
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }

    #[test]
    fn test_bare_token_without_scheme() {
        let headers = headers_with("abc.def.ghi");
        assert_eq!(bearer_token(&headers), None);
    }
}
