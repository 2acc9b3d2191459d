//! Single-value header propagation.

use axum::http::header::{HeaderMap, HeaderName, CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};

/// Headers describing the connection or body framing. The client and server
/// derive these themselves, so they are never copied across.
fn is_framing_header(name: &HeaderName) -> bool {
    name == HOST || name == CONTENT_LENGTH || name == TRANSFER_ENCODING || name == CONNECTION
}

/// Copy headers keeping only the first value of each name.
pub fn collapse_headers(headers: &HeaderMap) -> HeaderMap {
    let mut collapsed = HeaderMap::with_capacity(headers.keys_len());
    for name in headers.keys() {
        if is_framing_header(name) {
            continue;
        }
        if let Some(value) = headers.get(name) {
            collapsed.insert(name.clone(), value.clone());
        }
    }
    collapsed
}
