//! Outbound URL construction.
//!
//! The first two `/`-separated segments of the inbound path (the empty
//! segment before the leading slash and the route segment) are dropped and
//! the rest is appended to the backend base URL. Exactly one route segment is
//! stripped even when the configured prefix spans several segments or only
//! part of one, so `api/v1` applied to `/api/v1/users` yields `v1/users`.

/// Drop the leading empty segment and the route segment from a path.
pub fn strip_route_segment(path: &str) -> String {
    path.split('/').skip(2).collect::<Vec<_>>().join("/")
}

/// Build the outbound target: `backend + "/" + stripped path [+ "?" + query]`.
pub fn rewrite_target(backend: &str, path: &str, query: Option<&str>) -> String {
    let mut target = format!("{}/{}", backend, strip_route_segment(path));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target
}
