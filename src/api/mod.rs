//! API routing module
//!
//! Route table for the `/api` surface. Dispatch consults `match_route`
//! for the route stage and `allowed_methods` for the method-allowance
//! stage; handler business logic lives in `handlers`.

mod handlers;
mod response;

pub use response::json_response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Method, Response};

/// Handler signature for registered API routes.
///
/// Handlers convert their own failures into HTTP error responses;
/// nothing propagates past the dispatcher.
pub type ApiHandler = fn(&Parts) -> Response<Full<Bytes>>;

/// A registered `(method, path)` route.
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    handler: ApiHandler,
}

impl Route {
    /// Execute the handler for a matched request.
    pub fn invoke(&self, req: &Parts) -> Response<Full<Bytes>> {
        (self.handler)(req)
    }
}

/// The API route table.
pub struct ApiRouter {
    routes: Vec<Route>,
}

impl ApiRouter {
    /// Router with the default `/api` table.
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                method: Method::GET,
                path: "/api/health",
                handler: handlers::health,
            }],
        }
    }

    /// Find the route matching both method and path.
    pub fn match_route(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.method == *method && route.path == path)
    }

    /// Methods registered for `path`, in registration order.
    ///
    /// Empty when no route shares the path, which dispatch reads as
    /// "decline" rather than a 405.
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        self.routes
            .iter()
            .filter(|route| route.path == path)
            .map(|route| route.method.clone())
            .collect()
    }
}

impl Default for ApiRouter {
    fn default() -> Self {
        Self::new()
    }
}
