//! Incoming HTTP request type.

use crate::template::Params;

/// An incoming HTTP request as the router hands it to a handler.
///
/// Immutable by construction: the parameter bindings are extracted by the
/// matcher and threaded in here, never attached to some shared request
/// object after the fact. The method is carried for diagnostics only —
/// dispatch does not consult it.
pub struct Request {
    method: String,
    path: String,
    params: Params,
}

impl Request {
    pub(crate) fn new(method: String, path: String, params: Params) -> Self {
        Self { method, path, params }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/products/:productId`, `req.param("productId")` on
    /// `/products/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
