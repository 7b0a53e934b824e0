//! Ordered request router.
//!
//! Routes live in a plain `Vec`, scanned front to back on every request.
//! The first template that structurally matches wins — registration order is
//! priority, full stop. With a handful of static routes the linear scan is
//! O(routes × segments) and nowhere near the cost of the network I/O around
//! it, so there is no trie and no per-method tree to keep honest.

use std::sync::Arc;

use http::StatusCode;
use tracing::info;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;
use crate::template::{Params, RouteTemplate};

/// A template paired with its handler. Built once, never mutated.
struct RouteEntry {
    template: RouteTemplate,
    handler: BoxedHandler,
}

/// The application router.
///
/// Build it once at startup with [`Router::on`], then hand it to
/// [`Server::serve`](crate::Server::serve). Registration order matters:
/// the first matching template wins, so register the template you want to
/// answer before any other template the same path could fit.
///
/// ```rust,no_run
/// # use ruta::{Request, Response, Router};
/// # async fn list(_: Request) -> Response { Response::text("") }
/// # async fn detail(_: Request) -> Response { Response::text("") }
/// let app = Router::new()
///     .on("/products", list)
///     .on("/products/:productId", detail);
/// ```
pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a handler for a path template. Returns `self` for chaining.
    ///
    /// Templates use `:name` syntax for parameter segments; handlers read
    /// them back with [`Request::param`]. Every route answers regardless of
    /// HTTP method.
    pub fn on(mut self, template: &str, handler: impl Handler) -> Self {
        self.routes.push(RouteEntry {
            template: RouteTemplate::parse(template),
            handler: handler.into_boxed_handler(),
        });
        self
    }

    /// Scans the table in registration order; first match wins.
    pub(crate) fn lookup(&self, path: &str) -> Option<(BoxedHandler, Params)> {
        self.routes.iter().find_map(|entry| {
            entry
                .template
                .capture(path)
                .map(|params| (Arc::clone(&entry.handler), params))
        })
    }

    /// Routes one request to completion.
    ///
    /// On a match the winning handler runs with the extracted parameters;
    /// otherwise this synthesizes `404 Not Found` with body `page not found`
    /// and no handler is invoked. Domain-level misses (an unknown product id,
    /// say) are not this method's business — handlers report those in their
    /// own response bodies.
    pub async fn route(&self, method: &str, path: &str) -> Response {
        info!(%method, %path, "incoming request");

        match self.lookup(path) {
            Some((handler, params)) => {
                let req = Request::new(method.to_owned(), path.to_owned(), params);
                handler.call(req).await
            }
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .text("page not found"),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
