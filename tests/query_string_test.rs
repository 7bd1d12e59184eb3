//! Integration tests for the query-string editor and URL parameter helpers.

use ampify::{AmpError, QueryString, remove_url_param, set_url_param};

#[test]
fn test_parse_edit_serialize_round_trip() {
    let mut qs = QueryString::parse("?page=2&sort=name&debug=");
    assert_eq!(qs.get_parsed::<u32>("page"), Some(2));

    qs.set("page", "3");
    qs.append("filter", "active");
    qs.remove("debug");

    assert_eq!(qs.to_query_string(false), "page=3&sort=name&filter=active");
}

#[test]
fn test_duplicate_names_comma_join_on_get() {
    let qs = QueryString::parse("tag=rust&tag=html");
    assert_eq!(qs.get("tag").as_deref(), Some("rust,html"));
}

#[test]
fn test_set_collapses_duplicates_last_write_wins() {
    let mut qs = QueryString::parse("tag=rust&other=1&tag=html");
    qs.set("tag", "amp");
    assert_eq!(qs.to_query_string(false), "tag=amp&other=1");
}

#[test]
fn test_omit_empty_values() {
    let qs = QueryString::parse("a=1&b=&c=3");
    assert_eq!(qs.to_query_string(true), "a=1&c=3");
    assert_eq!(qs.to_query_string(false), "a=1&b=&c=3");
}

#[test]
fn test_typed_parse_with_default() {
    let qs = QueryString::parse("retries=oops");
    assert_eq!(qs.get_parsed_or::<u8>("retries", 5), 5);
    assert_eq!(qs.get_parsed_or::<u8>("absent", 7), 7);
}

#[test]
fn test_set_url_param_round_trip() {
    let url = "https://ex.com/search?q=rust&page=1";
    let with_page = set_url_param(url, "page", "2").expect("set failed");
    assert_eq!(with_page, "https://ex.com/search?q=rust&page=2");

    let without_page = remove_url_param(&with_page, "page").expect("remove failed");
    assert_eq!(without_page, "https://ex.com/search?q=rust");
}

#[test]
fn test_url_param_value_is_encoded() {
    let out = set_url_param("https://ex.com/", "q", "a b&c").expect("set failed");
    assert_eq!(out, "https://ex.com/?q=a+b%26c");
}

#[test]
fn test_invalid_url_rejected() {
    assert!(matches!(
        remove_url_param("::not-a-url::", "q"),
        Err(AmpError::InvalidArgument(_))
    ));
}
