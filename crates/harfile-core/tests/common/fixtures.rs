//! Entry fixtures covering every optional field.

use chrono::{FixedOffset, TimeZone};
use harfile_core::model::{
    Cache, CacheEntry, Content, Cookie, Entry, PostData, PostParameter, Record, Request,
    Response, Timings,
};

/// Bare entry: only required fields, every default left in place.
pub fn minimal_entry(url: &str) -> Entry {
    let started = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap();
    Entry::new(
        started,
        12.0,
        Request::new("GET", url, "HTTP/1.1"),
        Response::new(200, "OK", "HTTP/1.1", Content::new(0)),
        Timings::new(1.0, 10.0, 1.0),
    )
}

/// Entry with every optional field populated.
pub fn full_entry(i: usize) -> Entry {
    let started = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 30, 23, 59, 59)
        .unwrap();
    let request = Request::new("POST", format!("https://api.example.com/items/{i}"), "HTTP/2")
        .with_cookies(vec![Cookie::new("sid", "abc")
            .with_path("/")
            .with_domain("example.com")
            .with_expires("2025-01-01T00:00:00Z")
            .with_http_only(true)
            .with_secure(false)
            .with_comment("session")])
        .with_headers(vec![
            Record::new("Content-Type", "application/x-www-form-urlencoded"),
            Record::new("X-Trace", "t\"1\"").with_comment("quoted"),
        ])
        .with_query_string(vec![Record::new("page", i.to_string())])
        .with_post_data(
            PostData::new("application/x-www-form-urlencoded")
                .with_params(vec![
                    PostParameter::new("name").with_value("värde"),
                    PostParameter::new("upload")
                        .with_file_name("a.bin")
                        .with_content_type("application/octet-stream")
                        .with_comment("file"),
                ])
                .with_text("name=v%C3%A4rde")
                .with_comment("form"),
        )
        .with_headers_size(120)
        .with_body_size(0)
        .with_comment("request");
    let response = Response::new(
        201,
        "Created",
        "HTTP/2",
        Content::new(17)
            .with_compression(0.0)
            .with_mime_type("application/json; charset=utf-8")
            .with_text("{\"ok\":true}\n\t")
            .with_encoding("identity")
            .with_comment("body"),
    )
    .with_cookies(vec![Cookie::new("sid", "def")])
    .with_headers(vec![Record::new("Location", "/items/1")])
    .with_redirect_url("/items/1")
    .with_headers_size(80)
    .with_body_size(17)
    .with_comment("response");
    let timings = Timings::new(0.5, 20.25, 3.0)
        .with_blocked(0.0)
        .with_dns(1.5)
        .with_connect(4.0)
        .with_ssl(2.0)
        .with_comment("timed");
    let cache = Cache::new()
        .with_before_request(CacheEntry::new(
            "2024-07-01T00:00:00Z",
            "2024-06-30T00:00:00Z",
            "W/\"1\"",
            0,
        ))
        .with_after_request(
            CacheEntry::new("2024-07-02T00:00:00Z", "2024-06-30T23:59:59Z", "W/\"2\"", 1)
                .with_comment("refreshed"),
        )
        .with_comment("cache");

    Entry::new(started, 30.25, request, response, timings)
        .with_cache(cache)
        .with_server_ip_address("10.0.0.1")
        .with_connection("443")
        .with_comment(format!("entry {i}"))
}
