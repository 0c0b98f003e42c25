//! Query-string helpers.
//!
//! `GET /api/clients` accepts `status` more than once (`?status=due&status=paid`),
//! so the query is extracted as raw pairs rather than into a struct.

pub const STATUS_PARAM: &str = "status";

/// Values of every `status` parameter, in request order.
pub fn status_tokens(params: &[(String, String)]) -> Vec<&str> {
    params
        .iter()
        .filter(|(k, _)| k == STATUS_PARAM)
        .map(|(_, v)| v.as_str())
        .collect()
}
