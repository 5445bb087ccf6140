//! Structural HAR 1.2 check: required keys, no unknown keys, no `null`s, and
//! the JSON type of every field. Panics with the offending path.

use serde_json::{Map, Value};

fn object<'a>(value: &'a Value, path: &str) -> &'a Map<String, Value> {
    value
        .as_object()
        .unwrap_or_else(|| panic!("{path}: expected object, got {value}"))
}

fn keys(map: &Map<String, Value>, path: &str, required: &[&str], optional: &[&str]) {
    for key in required {
        assert!(map.contains_key(*key), "{path}: missing required key {key}");
    }
    for (key, value) in map {
        assert!(
            required.contains(&key.as_str()) || optional.contains(&key.as_str()),
            "{path}: unexpected key {key}"
        );
        assert!(!value.is_null(), "{path}.{key}: null is never written");
    }
}

fn string(map: &Map<String, Value>, path: &str, key: &str) {
    if let Some(v) = map.get(key) {
        assert!(v.is_string(), "{path}.{key}: expected string, got {v}");
    }
}

fn number(map: &Map<String, Value>, path: &str, key: &str) {
    if let Some(v) = map.get(key) {
        assert!(v.is_number(), "{path}.{key}: expected number, got {v}");
    }
}

fn integer(map: &Map<String, Value>, path: &str, key: &str) {
    if let Some(v) = map.get(key) {
        assert!(v.is_i64() || v.is_u64(), "{path}.{key}: expected integer, got {v}");
    }
}

fn boolean(map: &Map<String, Value>, path: &str, key: &str) {
    if let Some(v) = map.get(key) {
        assert!(v.is_boolean(), "{path}.{key}: expected boolean, got {v}");
    }
}

fn array<'a>(map: &'a Map<String, Value>, path: &str, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_else(|| panic!("{path}.{key}: expected array"))
}

fn name_version(value: &Value, path: &str) {
    let map = object(value, path);
    keys(map, path, &["name", "version"], &["comment"]);
    for key in ["name", "version", "comment"] {
        string(map, path, key);
    }
}

fn record(value: &Value, path: &str) {
    let map = object(value, path);
    keys(map, path, &["name", "value"], &["comment"]);
    for key in ["name", "value", "comment"] {
        string(map, path, key);
    }
}

fn cookie(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &["name", "value"],
        &["path", "domain", "expires", "httpOnly", "secure", "comment"],
    );
    for key in ["name", "value", "path", "domain", "expires", "comment"] {
        string(map, path, key);
    }
    boolean(map, path, "httpOnly");
    boolean(map, path, "secure");
}

fn cache_entry(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &["expires", "lastAccess", "eTag", "hitCount"],
        &["comment"],
    );
    for key in ["expires", "lastAccess", "eTag", "comment"] {
        string(map, path, key);
    }
    integer(map, path, "hitCount");
}

fn request(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &[
            "method",
            "url",
            "httpVersion",
            "cookies",
            "headers",
            "queryString",
            "headersSize",
            "bodySize",
        ],
        &["postData", "comment"],
    );
    for key in ["method", "url", "httpVersion", "comment"] {
        string(map, path, key);
    }
    integer(map, path, "headersSize");
    integer(map, path, "bodySize");
    for (i, c) in array(map, path, "cookies").iter().enumerate() {
        cookie(c, &format!("{path}.cookies[{i}]"));
    }
    for list in ["headers", "queryString"] {
        for (i, r) in array(map, path, list).iter().enumerate() {
            record(r, &format!("{path}.{list}[{i}]"));
        }
    }
    if let Some(post) = map.get("postData") {
        let post_path = format!("{path}.postData");
        let post = object(post, &post_path);
        keys(post, &post_path, &["mimeType"], &["params", "text", "comment"]);
        for key in ["mimeType", "text", "comment"] {
            string(post, &post_path, key);
        }
        if post.contains_key("params") {
            for (i, p) in array(post, &post_path, "params").iter().enumerate() {
                let p_path = format!("{post_path}.params[{i}]");
                let param = object(p, &p_path);
                keys(
                    param,
                    &p_path,
                    &["name"],
                    &["value", "fileName", "contentType", "comment"],
                );
                for key in ["name", "value", "fileName", "contentType", "comment"] {
                    string(param, &p_path, key);
                }
            }
        }
    }
}

fn response(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &[
            "status",
            "statusText",
            "httpVersion",
            "cookies",
            "headers",
            "headersSize",
            "bodySize",
        ],
        &["content", "redirectURL", "comment"],
    );
    integer(map, path, "status");
    for key in ["statusText", "httpVersion", "redirectURL", "comment"] {
        string(map, path, key);
    }
    integer(map, path, "headersSize");
    integer(map, path, "bodySize");
    for (i, c) in array(map, path, "cookies").iter().enumerate() {
        cookie(c, &format!("{path}.cookies[{i}]"));
    }
    for (i, r) in array(map, path, "headers").iter().enumerate() {
        record(r, &format!("{path}.headers[{i}]"));
    }
    if let Some(content) = map.get("content") {
        let c_path = format!("{path}.content");
        let c = object(content, &c_path);
        keys(
            c,
            &c_path,
            &["size"],
            &["compression", "mimeType", "text", "encoding", "comment"],
        );
        integer(c, &c_path, "size");
        number(c, &c_path, "compression");
        for key in ["mimeType", "text", "encoding", "comment"] {
            string(c, &c_path, key);
        }
    }
}

fn timings(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &["send", "wait", "receive"],
        &["blocked", "dns", "connect", "ssl", "comment"],
    );
    for key in ["send", "wait", "receive", "blocked", "dns", "connect", "ssl"] {
        number(map, path, key);
    }
    string(map, path, "comment");
}

fn entry(value: &Value, path: &str) {
    let map = object(value, path);
    keys(
        map,
        path,
        &["startedDateTime", "time", "request", "response", "timings"],
        &["pageref", "cache", "serverIPAddress", "connection", "comment"],
    );
    let started = map["startedDateTime"]
        .as_str()
        .unwrap_or_else(|| panic!("{path}.startedDateTime: expected string"));
    chrono::DateTime::parse_from_rfc3339(started)
        .unwrap_or_else(|e| panic!("{path}.startedDateTime: {started:?} is not ISO-8601: {e}"));
    number(map, path, "time");
    request(&map["request"], &format!("{path}.request"));
    response(&map["response"], &format!("{path}.response"));
    timings(&map["timings"], &format!("{path}.timings"));
    if let Some(cache) = map.get("cache") {
        let c_path = format!("{path}.cache");
        let c = object(cache, &c_path);
        keys(c, &c_path, &[], &["beforeRequest", "afterRequest", "comment"]);
        for half in ["beforeRequest", "afterRequest"] {
            if let Some(e) = c.get(half) {
                cache_entry(e, &format!("{c_path}.{half}"));
            }
        }
        string(c, &c_path, "comment");
    }
    for key in ["serverIPAddress", "connection", "comment"] {
        string(map, path, key);
    }
}

/// Validate a parsed document against the HAR 1.2 shape.
pub fn validate_document(doc: &Value) {
    let root = object(doc, "$");
    keys(root, "$", &["log"], &[]);
    let log = object(&root["log"], "log");
    keys(
        log,
        "log",
        &["version", "creator", "browser", "entries"],
        &["comment"],
    );
    assert_eq!(log["version"], "1.2", "log.version");
    name_version(&log["creator"], "log.creator");
    name_version(&log["browser"], "log.browser");
    string(log, "log", "comment");
    for (i, e) in array(log, "log", "entries").iter().enumerate() {
        entry(e, &format!("log.entries[{i}]"));
    }
}
