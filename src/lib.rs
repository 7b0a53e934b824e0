//! # ruta
//!
//! A minimal HTTP router. An ordered table of path templates, a linear scan,
//! first match wins. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Templates are compiled once at startup into literal and `:name` parameter
//! segments. Per request the table is scanned in registration order; the
//! first template whose segments line up structurally takes the request, and
//! its parameter bindings are handed to the handler as an immutable value.
//! Registration order is priority — a route registered earlier shadows any
//! later route the same path would fit.
//!
//! What ruta deliberately skips:
//!
//! - **Method dispatch** — every route answers regardless of HTTP verb
//! - **Query strings** — the raw path is the only routing input
//! - **Wildcards** — a parameter binds exactly one segment, never a tail
//! - **Middleware** — a handler is the whole pipeline
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ruta::{Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .on("/", home)
//!         .on("/users/:id", get_user);
//!
//!     Server::bind("0.0.0.0:8000").serve(app).await.unwrap();
//! }
//!
//! async fn home(_req: Request) -> Response {
//!     Response::text("Home Page")
//! }
//!
//! async fn get_user(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod template;

pub mod catalog;
pub mod events;

pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use template::Params;
