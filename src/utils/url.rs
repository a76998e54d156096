//! URL shape and scope predicates
//!
//! Accepted/rejected matrix:
//!
//! | input                      | `is_valid_url` | `is_relative_url` |
//! |----------------------------|----------------|-------------------|
//! | `https://example.com/a?b`  | yes            | no                |
//! | `http://localhost:8080/`   | yes            | no                |
//! | `//example.com/a`          | no             | no                |
//! | `example.com`              | no             | yes               |
//! | `/app/index.html`, `./`    | no             | yes               |
//! | `mailto:x@y.z`, `ftp://h`  | no             | no                |
//! | `not a url`, empty string  | no             | no                |

use regex::Regex;
use std::sync::LazyLock;

static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://(?:[^\s/?#@]+@)?(?:localhost|(?:[a-z\d](?:[a-z\d-]*[a-z\d])?\.)+[a-z]{2,}|\d{1,3}(?:\.\d{1,3}){3}|\[[\da-f:]+\])(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .expect("absolute url regex is valid")
});

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z\d+.-]*:").expect("scheme regex is valid"));

static ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?:)?//(?P<host>[^/?#\s]+)").expect("origin regex is valid")
});

/// Absolute `http`/`https` URL with a plausible host
pub fn is_valid_url(url: &str) -> bool {
    ABSOLUTE_URL.is_match(url)
}

/// Relative reference: no scheme, not protocol-relative, no whitespace
pub fn is_relative_url(url: &str) -> bool {
    !url.is_empty()
        && !url.starts_with("//")
        && !url.chars().any(char::is_whitespace)
        && !SCHEME.is_match(url)
}

/// Host (if any) and path of a URL or relative reference
struct Location<'a> {
    host: Option<&'a str>,
    path: &'a str,
}

fn locate(url: &str) -> Option<Location<'_>> {
    if let Some(caps) = ORIGIN.captures(url) {
        if url.chars().any(char::is_whitespace) {
            return None;
        }
        let end = caps.get(0).map_or(0, |m| m.end());
        return Some(Location {
            host: caps.name("host").map(|h| h.as_str()),
            path: strip_query(&url[end..]),
        });
    }
    if is_relative_url(url) {
        return Some(Location {
            host: None,
            path: strip_query(url),
        });
    }
    None
}

fn strip_query(url: &str) -> &str {
    match url.find(['?', '#']) {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Resolve a path reference against a base path, collapsing `.` and `..`
fn resolve_path(base: &str, reference: &str) -> String {
    let mut segments: Vec<&str> = if reference.starts_with('/') {
        Vec::new()
    } else {
        let dir = &base[..base.rfind('/').map_or(0, |i| i + 1)];
        dir.split('/').filter(|s| !s.is_empty()).collect()
    };

    let parts: Vec<&str> = reference.split('/').collect();
    let last = parts.len() - 1;
    let mut trailing_slash = false;

    for (i, part) in parts.iter().enumerate() {
        match *part {
            "" | "." => trailing_slash = i == last,
            ".." => {
                segments.pop();
                trailing_slash = i == last;
            }
            segment => {
                segments.push(segment);
                trailing_slash = false;
            }
        }
    }

    let mut path = format!("/{}", segments.join("/"));
    if trailing_slash && !segments.is_empty() {
        path.push('/');
    }
    path
}

/// True if `url`, resolved against `scope`, stays under the scope path.
///
/// Relative references resolve against the scope's directory. When both sides
/// carry a host they must match; when the scope is a bare path the origin is
/// unknown and only the path is compared.
pub fn check_relative_url_based_on_scope(url: &str, scope: &str) -> bool {
    let (Some(target), Some(scope)) = (locate(url), locate(scope)) else {
        return false;
    };

    if let (Some(url_host), Some(scope_host)) = (target.host, scope.host) {
        if !url_host.eq_ignore_ascii_case(scope_host) {
            return false;
        }
    }

    let scope_path = if scope.path.is_empty() {
        "/".to_string()
    } else {
        resolve_path("/", scope.path)
    };

    let resolved = if target.path.is_empty() {
        scope_path.clone()
    } else if target.host.is_some() {
        resolve_path("/", target.path)
    } else {
        resolve_path(&scope_path, target.path)
    };

    resolved.starts_with(&scope_path)
}
