use perseus::http::request::{Method, RequestLine, RequestUri, Version};

#[test]
fn test_method_get_case_insensitive() {
    assert_eq!(Method::from_token("GET"), Method::Get);
    assert_eq!(Method::from_token("get"), Method::Get);
    assert_eq!(Method::from_token("GeT"), Method::Get);
}

#[test]
fn test_method_anything_else_unsupported() {
    assert_eq!(Method::from_token("POST"), Method::Unsupported);
    assert_eq!(Method::from_token("DELETE"), Method::Unsupported);
    assert_eq!(Method::from_token(""), Method::Unsupported);
    assert_eq!(Method::from_token("GETT"), Method::Unsupported);
}

#[test]
fn test_version_recognized() {
    assert_eq!(Version::from_token("HTTP/1.0"), Version::Http10);
    assert_eq!(Version::from_token("HTTP/1.1"), Version::Http11);
    assert_eq!(Version::from_token("http/1.1"), Version::Http11);
}

#[test]
fn test_version_unrecognized_is_unknown() {
    assert_eq!(Version::from_token("HTTP/2.0"), Version::Unknown);
    assert_eq!(Version::from_token("garbage"), Version::Unknown);
    assert_eq!(Version::Unknown.as_str(), "");
}

#[test]
fn test_request_line_three_tokens() {
    let line = RequestLine::parse("GET /index.html HTTP/1.1");

    assert_eq!(line.method, Method::Get);
    assert_eq!(line.raw_method, "GET");
    assert_eq!(line.uri.path, "/index.html");
    assert_eq!(line.version, Version::Http11);
}

#[test]
fn test_request_line_two_tokens_defaults_version() {
    let line = RequestLine::parse("GET /page");

    assert_eq!(line.method, Method::Get);
    assert_eq!(line.uri.path, "/page");
    assert_eq!(line.version, Version::Unknown);
}

#[test]
fn test_request_line_one_token_defaults_uri_and_version() {
    let line = RequestLine::parse("GET");

    assert_eq!(line.method, Method::Get);
    assert_eq!(line.uri.path, "/");
    assert!(line.uri.query.is_empty());
    assert_eq!(line.version, Version::Unknown);
}

#[test]
fn test_request_line_unsupported_keeps_raw_method() {
    let line = RequestLine::parse("BREW /coffee HTTP/1.1");

    assert_eq!(line.method, Method::Unsupported);
    assert_eq!(line.raw_method, "BREW");
    assert_eq!(line.uri.path, "/coffee");
}

#[test]
fn test_uri_without_query() {
    let uri = RequestUri::parse("/folder/test.html");

    assert_eq!(uri.path, "/folder/test.html");
    assert!(uri.query.is_empty());
}

#[test]
fn test_uri_with_query_pairs() {
    let uri = RequestUri::parse("/search?q=rust&page=2");

    assert_eq!(uri.path, "/search");
    assert_eq!(uri.query_value("q"), Some("rust"));
    assert_eq!(uri.query_value("page"), Some("2"));
    assert_eq!(uri.query.len(), 2);
}

#[test]
fn test_uri_duplicate_query_key_last_wins() {
    let uri = RequestUri::parse("/x?a=1&b=2&b=3");

    assert_eq!(uri.query_value("a"), Some("1"));
    assert_eq!(uri.query_value("b"), Some("3"));
    assert_eq!(uri.query.len(), 2);
}

#[test]
fn test_uri_query_pair_without_equals_has_empty_value() {
    let uri = RequestUri::parse("/x?flag&k=v");

    assert_eq!(uri.query_value("flag"), Some(""));
    assert_eq!(uri.query_value("k"), Some("v"));
}

#[test]
fn test_uri_no_percent_decoding() {
    let uri = RequestUri::parse("/file%20name.txt?msg=hello%21");

    assert_eq!(uri.path, "/file%20name.txt");
    assert_eq!(uri.query_value("msg"), Some("hello%21"));
}

#[test]
fn test_uri_query_order_as_first_seen() {
    let uri = RequestUri::parse("/x?z=1&a=2&z=3");

    let keys: Vec<&str> = uri.query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["z", "a"]);
    assert_eq!(uri.query_value("z"), Some("3"));
}
