use super::UrlUtils;

#[test]
fn validate_base_url_adds_scheme() {
    let url = UrlUtils::validate_base_url("api.example.com").expect("URL should parse");
    assert_eq!(url.scheme(), "https");
}

#[test]
fn validate_base_url_keeps_explicit_scheme() {
    let url = UrlUtils::validate_base_url("http://api.example.com").expect("URL should parse");
    assert_eq!(url.scheme(), "http");
}

#[test]
fn join_is_slash_insensitive() {
    let base = UrlUtils::validate_base_url("https://api.example.com").expect("base");
    let a = UrlUtils::join(&base, "/user/profile").expect("join");
    let b = UrlUtils::join(&base, "user/profile").expect("join");
    assert_eq!(a.as_str(), "https://api.example.com/user/profile");
    assert_eq!(a, b);
}

#[test]
fn join_keeps_base_path_prefix() {
    let base = UrlUtils::validate_base_url("https://api.example.com/v2").expect("base");
    let url = UrlUtils::join(&base, "/user/profile").expect("join");
    assert_eq!(url.as_str(), "https://api.example.com/v2/user/profile");
}
