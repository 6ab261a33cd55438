//! Request dispatch module
//!
//! The ordered chain deciding each request's outcome: static asset,
//! API route, method allowance, or not-found. Stages run strictly in
//! the order declared by [`STAGES`]; the first stage to finalize wins
//! and nothing runs after it. A stage that declines leaves the request
//! untouched for the next one.

use crate::api::ApiRouter;
use crate::http;
use crate::logger;
use crate::static_files::StaticAssets;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// A single stage of the dispatch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Serve from the asset bundle.
    StaticAssets,
    /// Match against the API route table and run the handler.
    ApiRoutes,
    /// Report allowed methods for a path that matched by path only.
    MethodAllowance,
}

/// The declared stage order. Dispatch walks this list front to back.
pub const STAGES: [Stage; 3] = [Stage::StaticAssets, Stage::ApiRoutes, Stage::MethodAllowance];

/// Outcome of running one stage against a request.
pub enum StageOutcome {
    /// Terminal: this response goes to the client, later stages are skipped.
    Finalized(Response<Full<Bytes>>),
    /// The stage has no answer; the request passes to the next stage.
    Declined,
}

/// Shared read-only request-handling state, built once at startup.
pub struct AppState {
    pub assets: StaticAssets,
    pub api: ApiRouter,
}

/// Hyper service entry point.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    logger::log_request(&parts.method, &parts.uri);
    Ok(dispatch(&parts, &state).await)
}

/// Run the chain; the fall-through outcome when every stage declines is
/// the dispatcher's own 404.
pub async fn dispatch(req: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    for stage in STAGES {
        match run_stage(stage, req, state).await {
            StageOutcome::Finalized(response) => return response,
            StageOutcome::Declined => {}
        }
    }
    http::build_404_response()
}

async fn run_stage(stage: Stage, req: &Parts, state: &AppState) -> StageOutcome {
    match stage {
        Stage::StaticAssets => static_stage(req, &state.assets).await,
        Stage::ApiRoutes => route_stage(req, &state.api),
        Stage::MethodAllowance => allowance_stage(req, &state.api),
    }
}

/// Stage 1: resolve against the asset bundle. Only GET and HEAD are
/// servable as files; other methods fall through to the API stages.
async fn static_stage(req: &Parts, assets: &StaticAssets) -> StageOutcome {
    if req.method != Method::GET && req.method != Method::HEAD {
        return StageOutcome::Declined;
    }
    match assets.resolve(req.uri.path()).await {
        Some((content, content_type)) => StageOutcome::Finalized(http::build_file_response(
            content,
            content_type,
            req.method == Method::HEAD,
        )),
        None => StageOutcome::Declined,
    }
}

/// Stage 2: exact `(method, path)` match in the API route table.
fn route_stage(req: &Parts, api: &ApiRouter) -> StageOutcome {
    match api.match_route(&req.method, req.uri.path()) {
        Some(route) => StageOutcome::Finalized(route.invoke(req)),
        None => StageOutcome::Declined,
    }
}

/// Stage 3: the path is registered but the method is not; report what
/// is allowed.
fn allowance_stage(req: &Parts, api: &ApiRouter) -> StageOutcome {
    let allowed = api.allowed_methods(req.uri.path());
    if allowed.is_empty() {
        return StageOutcome::Declined;
    }
    StageOutcome::Finalized(http::build_405_response(&allowed))
}
