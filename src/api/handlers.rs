//! API route handler functions

use super::response::json_response;
use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Response, StatusCode};

/// `GET /api/health` - liveness payload
pub fn health(_req: &Parts) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "status": "ok",
            "server": "gamehost",
            "time": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }),
    )
}
